//! Logging setup
//!
//! Logging is off unless QUOTEBOOK_LOG is set (e.g. `QUOTEBOOK_LOG=debug`).
//! CLI commands log to stderr; the TUI logs to a file so the screen stays clean.

use std::fs::File;

use quotebook_core::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log level
const LOG_ENV: &str = "QUOTEBOOK_LOG";

/// Build a filter scoped to this workspace's crates
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("quotebook_core={},quotebook_cli={}", level, level))
}

/// Initialize logging for CLI commands (stderr)
pub fn init_cli_logging() {
    let Ok(log_level) = std::env::var(LOG_ENV) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize logging for TUI mode
///
/// Logs to file (config.log_file or default {data_dir}/debug.log).
pub fn init_tui_logging(config: &Config) {
    let Ok(log_level) = std::env::var(LOG_ENV) else {
        return;
    };

    let log_path = config.log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&log_level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}
