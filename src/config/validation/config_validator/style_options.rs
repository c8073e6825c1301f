use crate::{
    chart::{ChartOptions, ChartType},
    config::{
        validation::{config_validator::ConfigValidator, error::ValidationError},
        StyleConfig,
    },
};

impl ConfigValidator {
    /// Turn the `index`th style into chart options, or name the bad field.
    pub fn style_options(
        index: usize,
        style: &StyleConfig,
    ) -> Result<ChartOptions, ValidationError> {
        let field = |name: &str| format!("styles[{}].{}", index, name);
        let mut options = ChartOptions::default();

        if let Some(chart_type) = style.chart_type {
            match chart_type {
                ChartType::Bar { spacing, .. } => {
                    if !spacing.is_finite() || spacing < 0.0 {
                        return Err(ValidationError {
                            field: field("type.bar.spacing"),
                            error: format!("Must be a non-negative number, got {}", spacing),
                        });
                    }
                }
            }
            options = options.chart_type(chart_type);
        }

        if let Some(height) = style.height {
            if !height.is_finite() || height <= 0.0 {
                return Err(ValidationError {
                    field: field("height"),
                    error: format!("Must be a positive number, got {}", height),
                });
            }
            options = options.height(height);
        }

        if let Some(color) = &style.color {
            options = options.color(Self::parse_color(field("color"), color)?);
        }

        if let Some(background_color) = &style.background_color {
            let background_color = Self::parse_color(field("background_color"), background_color)?;
            options = options.background_color(background_color);
        }

        if let Some(show_value) = style.show_value {
            options = options.show_value(show_value);
        }

        if let Some(show_border_lines) = style.show_border_lines {
            options = options.show_border_lines(show_border_lines);
        }

        Ok(options)
    }
}
