use ratatui::style::Color;
use uuid::Uuid;

/// One labeled point of a [`Chart`](crate::chart::Chart).
///
/// The `id` is generated once on construction and never changes, so hosts can
/// use it to diff lists of points between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    id: Uuid,
    label: String,
    value: f64,
    override_color: Option<Color>,
}

impl ChartData {
    pub fn new(label: impl Into<String>, value: f64, override_color: Option<Color>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            value,
            override_color,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Bar color for this point, superseding the chart-wide color when set.
    pub fn override_color(&self) -> Option<Color> {
        self.override_color
    }
}
