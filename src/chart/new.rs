use ratatui::style::Color;

use crate::chart_data::ChartData;

use super::{Chart, ChartOptions, ChartType};

impl Chart {
    pub fn new(data: Vec<ChartData>, options: ChartOptions) -> Self {
        Self { data, options }
    }

    pub fn with_defaults(data: Vec<ChartData>) -> Self {
        Self::new(data, ChartOptions::default())
    }

    pub fn data(&self) -> &[ChartData] {
        &self.data
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn chart_type(mut self, chart_type: ChartType) -> Self {
        self.options = self.options.chart_type(chart_type);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.options = self.options.height(height);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.options = self.options.color(color);
        self
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.options = self.options.show_value(show_value);
        self
    }

    pub fn background_color(mut self, background_color: Color) -> Self {
        self.options = self.options.background_color(background_color);
        self
    }

    pub fn show_border_lines(mut self, show_border_lines: bool) -> Self {
        self.options = self.options.show_border_lines(show_border_lines);
        self
    }
}
