//! Path evaluator shared by hook mode and `ppg check`.
//!
//! Evaluation is purely textual: no `.`/`..` resolution, no symlink
//! following, no check that the file exists. The first catalog pattern found
//! anywhere in the path decides the outcome.
//!
//! # Example
//!
//! ```
//! use protected_path_guard::evaluator::{evaluate_path, PathDecision};
//!
//! let decision = evaluate_path("repo/.git/config");
//! assert!(decision.is_protected());
//! assert_eq!(decision.pattern_text(), r"\.git/");
//!
//! assert_eq!(evaluate_path("src/main.rs"), PathDecision::Allow);
//! ```

use crate::hook::HookInput;
use crate::patterns::catalog;

/// Byte range of the matched fragment within the evaluated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// The catalog entry that protected a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Position in the catalog.
    pub index: usize,
    /// Pattern text, as reported to the host.
    pub pattern: &'static str,
    /// Where the pattern matched.
    pub span: MatchSpan,
}

/// Outcome of evaluating one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDecision {
    /// Not protected. Hook mode stays silent.
    Allow,
    /// Protected by the given pattern.
    Deny(PatternMatch),
}

impl PathDecision {
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Deny(_))
    }

    /// Text of the matched pattern, or `""` when allowed.
    #[must_use]
    pub const fn pattern_text(&self) -> &'static str {
        match self {
            Self::Allow => "",
            Self::Deny(m) => m.pattern,
        }
    }

    #[must_use]
    pub const fn matched(&self) -> Option<&PatternMatch> {
        match self {
            Self::Allow => None,
            Self::Deny(m) => Some(m),
        }
    }
}

/// Evaluate a single path against the protected catalog.
#[must_use]
pub fn evaluate_path(path: &str) -> PathDecision {
    let Some(index) = crate::patterns::first_match_index(path) else {
        tracing::trace!(path, "no protected pattern matched");
        return PathDecision::Allow;
    };

    let entry = &catalog()[index];
    // The set and the individual matcher share an expression, so this finds
    // the same occurrence the set reported.
    let span = entry
        .regex
        .find(path)
        .map_or(MatchSpan { start: 0, end: 0 }, |m| MatchSpan {
            start: m.start(),
            end: m.end(),
        });

    tracing::trace!(path, pattern = entry.pattern, index, "protected pattern matched");
    PathDecision::Deny(PatternMatch {
        index,
        pattern: entry.pattern,
        span,
    })
}

/// Evaluate the target path of a hook request.
///
/// A request without `tool_input.file_path` evaluates the empty path, which
/// is never protected.
#[must_use]
pub fn evaluate_input(input: &HookInput) -> PathDecision {
    let decision = evaluate_path(input.file_path());
    tracing::debug!(
        tool = input.tool_name.as_deref().unwrap_or("<unknown>"),
        file_path = input.file_path(),
        protected = decision.is_protected(),
        pattern = decision.pattern_text(),
        "evaluated hook request"
    );
    decision
}
