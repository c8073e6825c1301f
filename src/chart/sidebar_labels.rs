use super::{format_value, Chart};

/// Scale reference shown beside the bars, top to bottom.
///
/// `mid` is always half of `max`, whatever the smallest value in the data is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLabels {
    pub max: String,
    pub mid: String,
    pub zero: String,
}

impl SidebarLabels {
    pub fn for_max(shared_max: f64) -> Self {
        Self {
            max: format_value(shared_max),
            mid: format_value(shared_max / 2.0),
            zero: "0".to_string(),
        }
    }

    pub fn as_array(&self) -> [&str; 3] {
        [self.max.as_str(), self.mid.as_str(), self.zero.as_str()]
    }

    /// Widest label, in columns.
    pub fn width(&self) -> u16 {
        self.as_array()
            .iter()
            .map(|label| label.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }
}

impl Chart {
    /// `None` unless the chart type asks for a sidebar.
    pub fn sidebar_labels(&self) -> Option<SidebarLabels> {
        if self.options.chart_type.with_sidebar() {
            Some(SidebarLabels::for_max(self.shared_max()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Chart, ChartData, ChartType};

    fn weekdays() -> Vec<ChartData> {
        vec![
            ChartData::new("Mon", 300.34, None),
            ChartData::new("Tue", 93.0, None),
            ChartData::new("Wed", 634.0, None),
            ChartData::new("Thu", -82.1, None),
        ]
    }

    #[test]
    fn test_labels_describe_shared_scale() {
        let labels = Chart::with_defaults(weekdays()).sidebar_labels().unwrap();
        assert_eq!(labels.as_array(), ["634", "317", "0"]);
        assert_eq!(labels.width(), 3);
    }

    #[test]
    fn test_mid_ignores_minimum() {
        let chart = Chart::with_defaults(vec![
            ChartData::new("a", -100.0, None),
            ChartData::new("b", 10.0, None),
        ]);
        assert_eq!(chart.sidebar_labels().unwrap().as_array(), ["10", "5", "0"]);
    }

    #[test]
    fn test_fractional_half() {
        let chart = Chart::with_defaults(vec![ChartData::new("a", 5.0, None)]);
        assert_eq!(chart.sidebar_labels().unwrap().as_array(), ["5", "2.5", "0"]);
    }

    #[test]
    fn test_empty_data_zero_labels() {
        let labels = Chart::with_defaults(Vec::new()).sidebar_labels().unwrap();
        assert_eq!(labels.as_array(), ["0", "0", "0"]);
    }

    #[test]
    fn test_no_sidebar() {
        let chart = Chart::with_defaults(weekdays()).chart_type(ChartType::bar(2.0, false));
        assert!(chart.sidebar_labels().is_none());
    }
}
