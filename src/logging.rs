//! Opt-in diagnostics.
//!
//! Hook mode must keep stdout for the protocol and should not chatter on
//! stderr, so no subscriber is installed unless `PPG_LOG` is set. When it is,
//! events go to stderr, filtered by the `EnvFilter` directives it holds
//! (e.g. `PPG_LOG=debug` or `PPG_LOG=protected_path_guard=trace`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter.
pub const LOG_ENV_VAR: &str = "PPG_LOG";

/// Install the stderr subscriber if `PPG_LOG` is set.
///
/// Returns whether a subscriber was installed. An invalid filter or a second
/// call leaves diagnostics off rather than failing the hook.
pub fn init_from_env() -> bool {
    if std::env::var_os(LOG_ENV_VAR).is_none() {
        return false;
    }

    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
