//! Sample charts for the demo binary.
use ratatui::style::Color;

use crate::{
    chart::{Chart, ChartOptions, ChartType},
    chart_data::ChartData,
    config::{AppConfig, ConfigValidator, ValidationError},
};

#[derive(Debug, Clone)]
pub struct Preview {
    pub title: String,
    pub chart: Chart,
}

/// A week of values with one negative day.
pub fn weekday_data(colors: [Option<Color>; 7]) -> Vec<ChartData> {
    let values = [
        ("Mon", 300.34),
        ("Tue", 93.0),
        ("Wed", 634.0),
        ("Thu", -82.1),
        ("Fri", 380.0),
        ("Sat", 222.0),
        ("Sun", 132.0),
    ];

    values
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| ChartData::new(label, value, color))
        .collect()
}

pub fn builtin() -> Vec<Preview> {
    vec![
        Preview {
            title: "Defaults".to_string(),
            chart: Chart::with_defaults(weekday_data([None; 7])),
        },
        Preview {
            title: "Cyan, blue Sunday, no border lines".to_string(),
            chart: Chart::new(
                weekday_data([None, None, None, None, None, None, Some(Color::Blue)]),
                ChartOptions::default()
                    .height(120.0)
                    .color(Color::Cyan)
                    .show_border_lines(false),
            ),
        },
        Preview {
            title: "Per-day colors, tight, no sidebar".to_string(),
            chart: Chart::new(
                weekday_data([
                    Some(Color::Cyan),
                    Some(Color::Gray),
                    Some(Color::Red),
                    None,
                    Some(Color::LightMagenta),
                    Some(Color::DarkGray),
                    Some(Color::LightGreen),
                ]),
                ChartOptions::default()
                    .chart_type(ChartType::bar(2.0, false))
                    .show_border_lines(false),
            ),
        },
    ]
}

/// Configured styles over the weekday sample, or the built-ins when none are
/// configured.
pub fn from_config(config: &AppConfig) -> Result<Vec<Preview>, ValidationError> {
    if config.styles.is_empty() {
        return Ok(builtin());
    }

    config
        .styles
        .iter()
        .enumerate()
        .map(|(index, style)| -> Result<Preview, ValidationError> {
            let options = ConfigValidator::style_options(index, style)?;
            Ok(Preview {
                title: style.title.clone().unwrap_or_else(|| format!("Style {}", index + 1)),
                chart: Chart::new(weekday_data([None; 7]), options),
            })
        })
        .collect()
}
