//! File logging.
//!
//! The terminal is owned by the UI, so log output goes to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use folio_config::LoggingConfig;
use tracing::Level;

/// Log file name inside the data directory.
const LOG_FILE: &str = "folio.log";

/// Resolve the log file path from config.
pub fn log_path(config: &LoggingConfig) -> Option<PathBuf> {
    config
        .file
        .clone()
        .or_else(|| folio_config::data_dir().map(|dir| dir.join(LOG_FILE)))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when no location is available.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let level = Level::from_str(config.level.trim())
        .map_err(|_| eyre!("invalid log level '{}'", config.level))?;

    let Some(path) = log_path(config) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("logs").join("folio.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(file.clone()),
        };
        assert_eq!(log_path(&config), Some(file));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert!(init(&config).is_err());
    }
}
