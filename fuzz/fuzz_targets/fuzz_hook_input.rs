//! Fuzz target for hook JSON input parsing.
//!
//! This fuzzes the JSON parsing that receives input from Claude Code's hook.
//! It tests for:
//! - Panics from malformed JSON
//! - Type confusion in `tool_input` / `file_path`
//! - Output written on a failed request

#![no_main]

use libfuzzer_sys::fuzz_target;

use protected_path_guard::hook::{parse_hook_input, run_hook};

fuzz_target!(|data: &[u8]| {
    // Try to interpret as UTF-8 first (JSON is UTF-8)
    if let Ok(json_str) = std::str::from_utf8(data) {
        // Skip extremely large inputs
        if json_str.len() > 100_000 {
            return;
        }

        // Parsing should never panic
        let _ = parse_hook_input(json_str);
    }

    // A failed request must never produce output
    let mut out = Vec::new();
    match run_hook(data, &mut out) {
        Ok(decision) => assert_eq!(decision.is_protected(), !out.is_empty()),
        Err(_) => assert!(out.is_empty()),
    }
});
