//! Protected-file guard for Claude Code.
//!
//! Blocks Edit/Write tool calls that target env files, secrets, keys,
//! credentials, or git/ssh internals. Runs as a `PreToolUse` hook.
//!
//! Exit behavior (hook mode):
//!   - Exit 0 with JSON {"hookSpecificOutput": {"permissionDecision": "deny", ...}} = block
//!   - Exit 0 with no output = allow
//!   - Exit 1 with no output = the request could not be evaluated

#![forbid(unsafe_code)]

use clap::Parser;
use protected_path_guard::cli::{self, CHECK_PROTECTED_EXIT_CODE, Cli, Command};
use protected_path_guard::error::FAILURE_EXIT_CODE;
use protected_path_guard::{hook, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_from_env();
    let cli = Cli::parse();

    match cli.resolved_command() {
        Command::Hook => run_hook_mode(),
        Command::Check { json, paths } => {
            cli::configure_colors();
            match cli::run_check(io::stdout().lock(), &paths, json) {
                Ok(false) => ExitCode::SUCCESS,
                Ok(true) => ExitCode::from(CHECK_PROTECTED_EXIT_CODE),
                Err(err) => {
                    eprintln!("ppg: {err}");
                    ExitCode::from(FAILURE_EXIT_CODE)
                }
            }
        }
        Command::Patterns { json } => {
            cli::configure_colors();
            match cli::run_patterns(io::stdout().lock(), json) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("ppg: {err}");
                    ExitCode::from(FAILURE_EXIT_CODE)
                }
            }
        }
    }
}

/// The single error boundary for hook mode: every failure, panics included,
/// becomes exit 1 with nothing on stdout.
fn run_hook_mode() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic during hook evaluation");
        std::process::exit(i32::from(FAILURE_EXIT_CODE));
    }));

    match hook::run_hook(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "hook request not evaluated");
            ExitCode::from(err.exit_code())
        }
    }
}
