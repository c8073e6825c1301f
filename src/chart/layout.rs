use ratatui::style::Color;
use tracing::debug;
use uuid::Uuid;

use super::{format_value, Chart, SidebarLabels};

/// Everything a [`Chart`] draws, computed from its data and options but not
/// yet placed on any surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub shared_max: f64,
    pub height: f64,
    pub spacing: f64,
    pub sidebar: Option<SidebarLabels>,
    pub bars: Vec<BarLayout>,
    pub show_value: bool,
    /// 2 with border lines (above and below the bars), 0 without.
    pub divider_count: usize,
}

/// One bar, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub id: Uuid,
    pub label: String,
    pub value: f64,
    pub value_text: Option<String>,
    /// `value / shared_max`, not clamped. Negative or above one is possible.
    pub fill_ratio: f64,
    /// `height * fill_ratio`, in points.
    pub fill_height: f64,
    pub fill_color: Color,
    pub track_color: Color,
}

impl Chart {
    pub fn layout(&self) -> ChartLayout {
        let options = &self.options;
        let shared_max = self.shared_max();

        let bars: Vec<BarLayout> = self
            .data
            .iter()
            .map(|point| {
                let fill_ratio = Self::fill_ratio(point.value(), shared_max);

                BarLayout {
                    id: point.id(),
                    label: point.label().to_string(),
                    value: point.value(),
                    value_text: options.show_value.then(|| format_value(point.value())),
                    fill_ratio,
                    fill_height: options.height * fill_ratio,
                    fill_color: point.override_color().unwrap_or(options.color),
                    track_color: options.background_color,
                }
            })
            .collect();

        debug!(bars = bars.len(), shared_max, "computed chart layout");

        ChartLayout {
            shared_max,
            height: options.height,
            spacing: options.chart_type.spacing(),
            sidebar: self.sidebar_labels(),
            bars,
            show_value: options.show_value,
            divider_count: if options.show_border_lines { 2 } else { 0 },
        }
    }
}
