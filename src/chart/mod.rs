mod chart_type;
mod options;
mod new;
mod shared_max;
mod format_value;
mod sidebar_labels;
mod layout;
mod desired_rows;
mod trait_widget;
mod render_dividers;
mod render_sidebar;
mod render_bars;
mod put_caption;

pub use chart_type::ChartType;
pub use options::{ChartOptions, DEFAULT_BACKGROUND_COLOR};
pub use format_value::format_value;
pub use sidebar_labels::SidebarLabels;
pub use layout::{BarLayout, ChartLayout};

use crate::chart_data::ChartData;

/// Points covered by one terminal row.
pub const POINTS_PER_ROW: f64 = 16.0;
/// Points covered by one terminal column.
pub const POINTS_PER_COLUMN: f64 = 8.0;

/// # Chart
/// Vertical bars scaled against the largest value in `data`, with an optional
/// max / half / zero sidebar, per-bar value captions and top and bottom
/// divider lines.
///
/// Nothing is cached: every call to [`Chart::layout`] or a render recomputes
/// the scale from the data, so a `Chart` can be rebuilt freely each frame.
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
/// use simple_chart::{Chart, ChartData};
///
/// let chart = Chart::with_defaults(vec![
///     ChartData::new("Mon", 300.34, None),
///     ChartData::new("Wed", 634.0, Some(Color::Red)),
/// ]);
/// assert_eq!(chart.shared_max(), 634.0);
///
/// let area = Rect::new(0, 0, 30, 10);
/// let mut buf = Buffer::empty(area);
/// (&chart).render(area, &mut buf);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    data: Vec<ChartData>,
    options: ChartOptions,
}
