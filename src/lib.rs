//! Protected-file guard library.
//!
//! Exposes the protected-path catalog, the evaluator, and the hook protocol
//! used by the `ppg` binary.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod hook;
pub mod logging;
pub mod patterns;

pub use error::GuardError;
pub use evaluator::{MatchSpan, PathDecision, PatternMatch, evaluate_input, evaluate_path};
pub use hook::{HookInput, HookOutput, ToolInput, run_hook};
