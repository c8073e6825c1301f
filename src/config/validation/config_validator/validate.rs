use tracing::{debug, error};

use crate::config::{
    validation::{config_validator::ConfigValidator, error::ValidationError},
    AppConfig,
};

impl ConfigValidator {
    /// Parse a config file and check every style can become chart options.
    pub fn validate(config_yaml: &str) -> color_eyre::Result<AppConfig> {
        let config: AppConfig = serde_yaml::from_str(config_yaml)
            .map_err(|e| {
                error!("Failed to parse config: {}", e);
                ValidationError {
                    field: "yaml".to_string(),
                    error: format!("Failed to parse YAML: {}", e),
                }
            })?;

        debug!("styles: {}", config.styles.len());

        if config.log_dir.trim().is_empty() {
            return Err(ValidationError {
                field: "log_dir".to_string(),
                error: "Cannot be empty".to_string(),
            }.into());
        }

        for (index, style) in config.styles.iter().enumerate() {
            Self::style_options(index, style)?;
        }

        Ok(config)
    }
}
