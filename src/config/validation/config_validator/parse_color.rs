use std::str::FromStr;

use ratatui::style::Color;

use crate::config::validation::{config_validator::ConfigValidator, error::ValidationError};

impl ConfigValidator {
    pub(super) fn parse_color(field: String, value: &str) -> Result<Color, ValidationError> {
        Color::from_str(value.trim()).map_err(|_| ValidationError {
            field,
            error: format!("Unknown color: {:?}. Use a color name, #rrggbb or 0-255", value),
        })
    }
}
