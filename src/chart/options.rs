use ratatui::style::Color;

use super::ChartType;

/// 256-color dark gray, the closest terminal stand-in for a 14% gray wash.
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::Indexed(236);

/// Display configuration for a [`Chart`](super::Chart).
///
/// | field               | default                          |
/// |---------------------|----------------------------------|
/// | `chart_type`        | `Bar { spacing: 8, sidebar }`    |
/// | `height`            | `250` points                     |
/// | `color`             | green                            |
/// | `show_value`        | `true`                           |
/// | `background_color`  | [`DEFAULT_BACKGROUND_COLOR`]     |
/// | `show_border_lines` | `true`                           |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub chart_type: ChartType,
    pub height: f64,
    pub color: Color,
    pub show_value: bool,
    pub background_color: Color,
    pub show_border_lines: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            height: 250.0,
            color: Color::Green,
            show_value: true,
            background_color: DEFAULT_BACKGROUND_COLOR,
            show_border_lines: true,
        }
    }
}

impl ChartOptions {
    pub fn chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    pub fn background_color(mut self, background_color: Color) -> Self {
        self.background_color = background_color;
        self
    }

    pub fn show_border_lines(mut self, show_border_lines: bool) -> Self {
        self.show_border_lines = show_border_lines;
        self
    }
}
