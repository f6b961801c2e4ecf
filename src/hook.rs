//! Claude Code hook protocol handling.
//!
//! This module handles the JSON input/output for the `PreToolUse` hook on
//! file-editing tools. It parses incoming hook requests and formats denial
//! responses. Allowing is silent: no output, exit 0.

use crate::error::GuardError;
use crate::evaluator::{PathDecision, evaluate_input};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::io::{Read, Write};

/// Upper bound on hook input. `Write` requests carry the full file content,
/// so this is far above any realistic payload.
pub const MAX_HOOK_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Input structure from Claude Code's `PreToolUse` hook.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HookInput {
    /// The name of the tool being invoked, when it is a string. Diagnostics only.
    pub tool_name: Option<String>,

    /// Tool-specific input parameters.
    pub tool_input: ToolInput,
}

/// Tool-specific input containing the file to be written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolInput {
    /// Target path of the edit. Absent means empty.
    #[serde(default)]
    pub file_path: String,
}

impl HookInput {
    /// Build a request for `tool` targeting `file_path`.
    #[must_use]
    pub fn with_file_path(tool: &str, file_path: &str) -> Self {
        Self {
            tool_name: Some(tool.to_string()),
            tool_input: ToolInput {
                file_path: file_path.to_string(),
            },
        }
    }

    /// The path to evaluate (`""` when the request named none).
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.tool_input.file_path
    }
}

/// Output structure for denying an edit.
#[derive(Debug, Serialize)]
pub struct HookOutput<'a> {
    /// Hook-specific output with the decision.
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput<'a>,
}

/// Hook-specific output with decision and reason.
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput<'a> {
    /// Always "`PreToolUse`" for this hook.
    #[serde(rename = "hookEventName")]
    pub hook_event_name: &'static str,

    /// Always "deny": allowing is signalled by silence.
    #[serde(rename = "permissionDecision")]
    pub permission_decision: &'static str,

    /// Human-readable explanation naming the matched pattern.
    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: Cow<'a, str>,
}

/// Parse a raw hook request.
///
/// Missing `tool_input` or `file_path` degrade to an empty path. Present but
/// wrongly typed values (including `null`) are errors, as is any top-level
/// value other than an object.
pub fn parse_hook_input(raw: &str) -> Result<HookInput, GuardError> {
    let document: Value = serde_json::from_str(raw)?;
    let Value::Object(mut fields) = document else {
        return Err(GuardError::Shape("hook input must be a JSON object"));
    };

    let tool_name = fields
        .get("tool_name")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let tool_input = match fields.remove("tool_input") {
        None => ToolInput::default(),
        Some(value @ Value::Object(_)) => serde_json::from_value(value)?,
        Some(_) => return Err(GuardError::Shape("tool_input must be a JSON object")),
    };

    Ok(HookInput {
        tool_name,
        tool_input,
    })
}

/// Read and parse hook input from `reader`.
///
/// # Errors
///
/// Returns [`GuardError::Io`] if the reader fails (including non-UTF-8
/// input), [`GuardError::InputTooLarge`] if the input exceeds `max_bytes`,
/// and [`GuardError::Json`] or [`GuardError::Shape`] if it is not a hook
/// request.
pub fn read_hook_input<R: Read>(reader: R, max_bytes: usize) -> Result<HookInput, GuardError> {
    let mut input = String::with_capacity(256);
    // Read up to limit + 1 to detect overflow
    reader
        .take(max_bytes as u64 + 1)
        .read_to_string(&mut input)?;

    if input.len() > max_bytes {
        return Err(GuardError::InputTooLarge(input.len()));
    }

    parse_hook_input(&input)
}

/// Format the denial reason for a matched pattern.
#[must_use]
pub fn format_denial_reason(pattern: &str) -> String {
    format!("Protected file pattern: {pattern}")
}

/// Build the deny document for a matched pattern.
#[must_use]
pub fn denial_output(pattern: &str) -> HookOutput<'static> {
    HookOutput {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: "PreToolUse",
            permission_decision: "deny",
            permission_decision_reason: Cow::Owned(format_denial_reason(pattern)),
        },
    }
}

/// Write the deny document as a single JSON line.
pub fn write_denial<W: Write>(mut writer: W, pattern: &str) -> Result<(), GuardError> {
    serde_json::to_writer(&mut writer, &denial_output(pattern))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Answer one hook request: read it, evaluate it, and emit a denial if needed.
///
/// Nothing is written unless the whole request was read and parsed.
pub fn run_hook<R: Read, W: Write>(reader: R, writer: W) -> Result<PathDecision, GuardError> {
    let input = read_hook_input(reader, MAX_HOOK_INPUT_BYTES)?;
    let decision = evaluate_input(&input);

    if let PathDecision::Deny(matched) = decision {
        write_denial(writer, matched.pattern)?;
    }

    Ok(decision)
}
