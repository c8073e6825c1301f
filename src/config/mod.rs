mod validation;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::chart::ChartType;

pub use validation::{ConfigValidator, ValidationError};

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "simple-chart.yaml";

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Chart styles to preview. Empty means the built-in previews.
    #[serde(default)]
    pub styles: Vec<StyleConfig>,
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            styles: Vec::new(),
        }
    }
}

/// One previewed chart style. Unset fields keep the
/// [`ChartOptions`](crate::ChartOptions) defaults, colors are ratatui color
/// strings (`cyan`, `#2c2c2e`, `236`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type", with = "serde_yaml::with::singleton_map")]
    pub chart_type: Option<ChartType>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub show_value: Option<bool>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub show_border_lines: Option<bool>,
}

impl AppConfig {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> color_eyre::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = ConfigValidator::validate(&yaml)?;

        info!(path = %path.display(), styles = config.styles.len(), "loaded config");

        Ok(config)
    }

    /// Loads `path` when given, otherwise [`DEFAULT_CONFIG_FILE`] if it
    /// exists, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> color_eyre::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "log_dir: /tmp/chart-logs\nstyles:\n  - title: Plain\n").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.log_dir, "/tmp/chart-logs");
        assert_eq!(config.styles.len(), 1);
        assert_eq!(config.styles[0].title.as_deref(), Some("Plain"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(dir.path().join("nope.yaml")).is_err());
    }

    #[test]
    fn test_explicit_path_is_required_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(AppConfig::load_or_default(Some(&missing)).is_err());
    }
}
