pub mod chart;
pub mod chart_data;
pub mod config;
pub mod previews;
pub mod style;
pub mod util;

pub use chart::{
    format_value, BarLayout, Chart, ChartLayout, ChartOptions, ChartType, SidebarLabels,
    DEFAULT_BACKGROUND_COLOR, POINTS_PER_COLUMN, POINTS_PER_ROW,
};
pub use chart_data::ChartData;
pub use config::{AppConfig, StyleConfig};
