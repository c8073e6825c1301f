// src/util/log.rs

//! File logging for the demo TUI. The terminal is owned by ratatui, so
//! tracing output goes to `<log_dir>/simple-chart.log` instead of stderr.
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

pub const LOG_FILE_NAME: &str = "simple-chart.log";

/// `DEBUG=true` turns on debug output.
pub fn debug_enabled() -> bool {
    std::env::var("DEBUG").unwrap_or_default() == "true"
}

pub fn max_level() -> Level {
    if debug_enabled() { Level::DEBUG } else { Level::INFO }
}

/// Creates `log_dir` and truncates the log file (fresh each run).
pub fn create_log_file(log_dir: impl AsRef<Path>) -> std::io::Result<(PathBuf, File)> {
    let log_dir = log_dir.as_ref();
    create_dir_all(log_dir)?;

    let path = log_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Installs the global tracing subscriber. Returns the log file path.
pub fn init(log_dir: impl AsRef<Path>) -> color_eyre::Result<PathBuf> {
    let (path, file) = create_log_file(log_dir)?;

    tracing_subscriber::fmt()
        .with_max_level(max_level())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_creation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        let (path, _file) = create_log_file(&log_dir).unwrap();

        assert_eq!(path, log_dir.join(LOG_FILE_NAME));
        assert!(path.exists());
    }

    #[test]
    fn test_log_file_starts_fresh() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(LOG_FILE_NAME), "old run").unwrap();

        let (path, _file) = create_log_file(temp_dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }
}
