use serde::Deserialize;

/// Kind of chart to draw, with the parameters specific to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ChartType {
    /// Vertical bars. `spacing` is the gap between bars in points,
    /// `with_sidebar` toggles the max / half / zero label column.
    Bar {
        #[serde(default = "default_spacing")]
        spacing: f64,
        #[serde(default = "default_with_sidebar")]
        with_sidebar: bool,
    },
}

fn default_spacing() -> f64 {
    8.0
}

fn default_with_sidebar() -> bool {
    true
}

impl ChartType {
    pub fn bar(spacing: f64, with_sidebar: bool) -> Self {
        ChartType::Bar { spacing, with_sidebar }
    }

    pub fn spacing(&self) -> f64 {
        match self {
            ChartType::Bar { spacing, .. } => *spacing,
        }
    }

    pub fn with_sidebar(&self) -> bool {
        match self {
            ChartType::Bar { with_sidebar, .. } => *with_sidebar,
        }
    }
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Bar {
            spacing: default_spacing(),
            with_sidebar: default_with_sidebar(),
        }
    }
}
