//! Structured logging
//!
//! Diagnostics go through `tracing`. The TUI owns the terminal, so it only logs
//! when a file is configured; the line-oriented commands may also log to stderr.
//! `RUST_LOG` overrides the configured level.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level filter (trace, debug, info, warn, error) or full directive string
    pub level: String,
    /// Write logs to this file; takes precedence over `stderr`
    pub file: Option<PathBuf>,
    /// Write logs to stderr when no file is set
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            stderr: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to create log file: {0}")]
    FileCreate(#[from] io::Error),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(String),
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Install the global subscriber described by `config`
///
/// With neither a file nor stderr configured nothing is installed and events
/// are discarded.
///
/// # Errors
///
/// Returns `LogError` if the level is not a valid filter, the log file cannot
/// be created, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let fallback = EnvFilter::try_new(&config.level)
        .map_err(|_| LogError::InvalidLevel(config.level.clone()))?;

    if LOGGING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

    if let Some(path) = &config.file {
        ensure_parent_dir(path)?;
        let file = File::create(path)?;
        fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| LogError::SetSubscriber(e.to_string()))?;
    } else if config.stderr {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| LogError::SetSubscriber(e.to_string()))?;
    } else {
        return Ok(());
    }

    let _ = LOGGING_INITIALIZED.set(());
    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_quiet() {
        let config = LogConfig::default();
        assert_eq!(config.level, "warn");
        assert!(config.file.is_none());
        assert!(!config.stderr);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let config = LogConfig {
            level: "wiki_game=loud".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(LogError::InvalidLevel(level)) if level == "wiki_game=loud"
        ));
    }

    #[test]
    fn no_sink_installs_nothing() {
        assert!(init_logging(&LogConfig::default()).is_ok());
    }
}
