//! The protected-path catalog.
//!
//! Every pattern is compiled case-insensitively and searched anywhere in the
//! target path (no full-string match). The catalog is fixed at build time and
//! its order is significant: when several patterns match, the earliest entry
//! is the one reported.

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use std::sync::LazyLock;

/// A single entry of the protected-path catalog.
#[derive(Debug)]
pub struct ProtectedPattern {
    /// Pattern text as reported in denial reasons.
    pub pattern: &'static str,
    /// Expression actually compiled. Differs from `pattern` only where a
    /// trailing `$` has to tolerate one final newline.
    pub expr: &'static str,
    /// Compiled, case-insensitive matcher for `expr`.
    pub regex: Regex,
}

/// Create a protected pattern; panics at first use if the expression is invalid.
///
/// The two-argument form compiles `$expr` but reports `$pattern`.
macro_rules! protected {
    ($pattern:literal) => {
        protected!($pattern, $pattern)
    };
    ($pattern:literal, $expr:literal) => {
        ProtectedPattern {
            pattern: $pattern,
            expr: $expr,
            regex: RegexBuilder::new($expr)
                .case_insensitive(true)
                .build()
                .expect(concat!("protected pattern '", $pattern, "' should compile")),
        }
    };
}

/// The ordered catalog.
///
/// `$` is a line-end anchor here: `key.pem\n` is still a key file.
pub static PROTECTED_PATTERNS: LazyLock<Vec<ProtectedPattern>> = LazyLock::new(|| {
    vec![
        protected!(r"^\.env"),
        protected!(r"^\.env\."),
        protected!(r"secrets/"),
        protected!(r"\.git/"),
        protected!(r"\.ssh/"),
        protected!(r"config/.*\.prod"),
        protected!(r"credentials"),
        protected!(r"\.pem$", r"\.pem\n?\z"),
        protected!(r"\.key$", r"\.key\n?\z"),
    ]
});

/// All catalog expressions in one automaton, so a clean path costs one scan.
static PROTECTED_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSetBuilder::new(PROTECTED_PATTERNS.iter().map(|p| p.expr))
        .case_insensitive(true)
        .build()
        .expect("protected pattern set should compile")
});

/// The catalog, in evaluation order.
#[inline]
pub fn catalog() -> &'static [ProtectedPattern] {
    &PROTECTED_PATTERNS
}

/// Index of the first catalog pattern found in `path`, if any.
#[inline]
pub fn first_match_index(path: &str) -> Option<usize> {
    if path.is_empty() {
        return None;
    }
    // SetMatches iterates in ascending index order.
    PROTECTED_SET.matches(path).iter().next()
}
