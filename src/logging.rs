//! Tracing subscriber setup for the binary

use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory
pub const LOG_FILE: &str = "wordle-daily.log";

/// Filter directive for a `-v` count; `RUST_LOG` overrides it
#[must_use]
pub const fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordle_daily=warn",
        1 => "wordle_daily=info",
        2 => "wordle_daily=debug",
        _ => "debug",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbosity)))
}

/// Log to stderr (line-mode commands)
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr(verbosity: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(verbosity))
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

/// Log to `dir/wordle-daily.log` (TUI mode, keeps the screen clean)
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file(verbosity: u8, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter(verbosity))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(directive(0), "wordle_daily=warn");
        assert_eq!(directive(2), "wordle_daily=debug");
        assert_eq!(directive(9), "debug");
    }
}
