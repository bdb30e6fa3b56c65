//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

const DEFAULT_LEVEL: &str = "warn";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file. Used by the TUI, which owns the terminal.
    File(PathBuf),
    Off,
}

impl LogTarget {
    /// The TUI logs to the configured file or nowhere.
    pub fn for_tui(settings: &Settings) -> Self {
        match &settings.log_file {
            Some(path) => Self::File(path.clone()),
            None => Self::Off,
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset.
///
/// Each `-v` raises the level: info, debug, trace. Without any the
/// configured `log_level` applies, then `warn`.
pub fn filter_directive(settings: &Settings, verbosity: u8) -> String {
    match verbosity {
        0 => settings
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Calling it twice keeps the first one.
pub fn init(settings: &Settings, verbosity: u8, target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(settings, verbosity)));

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_target(false)
                .with_ansi(false)
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
