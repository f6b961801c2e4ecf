//! Command-line surface.
//!
//! `ppg` with no subcommand is hook mode, which is how the host invokes it.
//! `check` and `patterns` are for humans and scripts inspecting the catalog;
//! they never read stdin.

use crate::evaluator::{PathDecision, evaluate_path};
use crate::patterns::catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Exit status of `ppg check` when at least one path is protected.
pub const CHECK_PROTECTED_EXIT_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "ppg")]
#[command(about = "Claude Code hook that blocks edits to protected files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Answer one PreToolUse request read from stdin (the default)
    Hook,

    /// Check paths against the protected patterns
    Check {
        /// Print one JSON object per path
        #[arg(long)]
        json: bool,

        /// Paths to check (matched as text; nothing is resolved on disk)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the protected patterns in evaluation order
    Patterns {
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run, with hook mode as the default.
    #[must_use]
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Hook)
    }
}

/// Disable colors unless stdout is a terminal and nobody opted out.
pub fn configure_colors() {
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("PPG_NO_COLOR").is_some() {
        colored::control::set_override(false);
        return;
    }

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    path: &'a str,
    protected: bool,
    pattern: Option<&'static str>,
}

/// Evaluate each path and report it. Returns whether any path was protected.
pub fn run_check<W: Write>(mut out: W, paths: &[String], json: bool) -> io::Result<bool> {
    let mut any_protected = false;

    for path in paths {
        let decision = evaluate_path(path);
        any_protected |= decision.is_protected();

        if json {
            let record = CheckRecord {
                path,
                protected: decision.is_protected(),
                pattern: decision.matched().map(|m| m.pattern),
            };
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_check_line(path, &decision))?;
        }
    }

    out.flush()?;
    Ok(any_protected)
}

/// One human-readable line, with the matched fragment highlighted.
fn format_check_line(path: &str, decision: &PathDecision) -> String {
    match decision {
        PathDecision::Allow => format!("{} {path}", "ALLOW".green()),
        PathDecision::Deny(m) => {
            let (before, rest) = path.split_at(m.span.start);
            let (hit, after) = rest.split_at(m.span.end - m.span.start);
            format!(
                "{}  {before}{}{after}  ({})",
                "DENY".red().bold(),
                hit.red().underline(),
                m.pattern.yellow()
            )
        }
    }
}

/// Print the catalog in order.
pub fn run_patterns<W: Write>(mut out: W, json: bool) -> io::Result<()> {
    if json {
        let patterns: Vec<&str> = catalog().iter().map(|p| p.pattern).collect();
        serde_json::to_writer(&mut out, &patterns)?;
        writeln!(out)?;
    } else {
        for (idx, entry) in catalog().iter().enumerate() {
            writeln!(out, "{:>2}  {}", idx + 1, entry.pattern.cyan())?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn check_output(paths: &[&str], json: bool) -> (bool, String) {
        no_color();
        let paths: Vec<String> = paths.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        let any = run_check(&mut out, &paths, json).unwrap();
        (any, String::from_utf8(out).unwrap())
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn cli_definition_is_valid() {
            <Cli as CommandFactory>::command().debug_assert();
        }

        #[test]
        fn no_subcommand_means_hook() {
            let cli = Cli::try_parse_from(["ppg"]).unwrap();
            assert_eq!(cli.resolved_command(), Command::Hook);
        }

        #[test]
        fn check_requires_paths() {
            assert!(Cli::try_parse_from(["ppg", "check"]).is_err());
            let cli = Cli::try_parse_from(["ppg", "check", "--json", "a", "b"]).unwrap();
            assert_eq!(
                cli.resolved_command(),
                Command::Check {
                    json: true,
                    paths: vec!["a".to_string(), "b".to_string()],
                }
            );
        }
    }

    mod check_tests {
        use super::*;

        #[test]
        fn human_output() {
            let (any, text) = check_output(&["src/lib.rs", "keys/id_rsa.key"], false);
            assert!(any);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines[0], "ALLOW src/lib.rs");
            assert_eq!(lines[1], r"DENY  keys/id_rsa.key  (\.key$)");
        }

        #[test]
        fn all_allowed_reports_false() {
            let (any, _) = check_output(&["Cargo.toml", "myapp.env"], false);
            assert!(!any);
        }

        #[test]
        fn json_output() {
            let (_, text) = check_output(&["secrets/api.txt", "notes.md"], true);
            let records: Vec<serde_json::Value> = text
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect();
            assert_eq!(
                records[0],
                serde_json::json!({"path": "secrets/api.txt", "protected": true, "pattern": "secrets/"})
            );
            assert_eq!(
                records[1],
                serde_json::json!({"path": "notes.md", "protected": false, "pattern": null})
            );
        }
    }

    mod patterns_tests {
        use super::*;

        #[test]
        fn json_lists_catalog_in_order() {
            let mut out = Vec::new();
            run_patterns(&mut out, true).unwrap();
            let listed: Vec<String> = serde_json::from_slice(&out).unwrap();
            assert_eq!(listed.len(), catalog().len());
            assert_eq!(listed[0], r"^\.env");
            assert_eq!(listed[8], r"\.key$");
        }

        #[test]
        fn human_listing_is_numbered() {
            no_color();
            let mut out = Vec::new();
            run_patterns(&mut out, false).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert_eq!(text.lines().next(), Some(r" 1  ^\.env"));
            assert_eq!(text.lines().count(), 9);
        }
    }
}
