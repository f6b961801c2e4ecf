//! Error type for hook evaluation.
//!
//! Every variant ends the process the same way: exit status 1 and nothing on
//! stdout. The host's own fallback policy decides what happens next, so the
//! variants exist for diagnostics only.

use std::fmt;
use std::io;

/// Exit status used for every failure in hook mode.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Error type for reading, parsing and answering a hook request.
#[derive(Debug)]
pub enum GuardError {
    /// Failed to read stdin or write stdout.
    Io(io::Error),
    /// Input exceeded the configured size limit.
    InputTooLarge(usize),
    /// Input was not valid JSON, or a field had the wrong JSON type.
    Json(serde_json::Error),
    /// Valid JSON with a shape the hook protocol never produces.
    Shape(&'static str),
}

impl GuardError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::InputTooLarge(len) => write!(f, "hook input too large ({len} bytes)"),
            Self::Json(err) => write!(f, "invalid hook input: {err}"),
            Self::Shape(what) => write!(f, "unexpected hook input shape: {what}"),
        }
    }
}

impl std::error::Error for GuardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InputTooLarge(_) | Self::Shape(_) => None,
        }
    }
}

impl From<io::Error> for GuardError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn every_variant_exits_with_one() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            GuardError::Io(io::Error::other("boom")),
            GuardError::InputTooLarge(10),
            GuardError::Json(json_err),
            GuardError::Shape("top-level array"),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            GuardError::InputTooLarge(42).to_string(),
            "hook input too large (42 bytes)"
        );
        assert_eq!(
            GuardError::Shape("tool_input must be an object").to_string(),
            "unexpected hook input shape: tool_input must be an object"
        );
    }

    #[test]
    fn source_is_kept_for_wrapped_errors() {
        let err: GuardError = io::Error::other("pipe closed").into();
        assert!(err.source().is_some());
        assert!(GuardError::Shape("x").source().is_none());
    }
}
