use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::Chart;

impl Widget for &Chart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let area = Rect {
            height: area.height.min(self.desired_rows()),
            ..area
        };
        if area.is_empty() {
            return;
        }

        let layout = self.layout();

        let body = self.render_dividers(&layout, area, buf);
        if body.is_empty() {
            return;
        }

        let caption_rows = if layout.show_value { 2 } else { 1 };
        let track_rows = body.height.saturating_sub(caption_rows);

        let bars_area = match &layout.sidebar {
            Some(labels) => self.render_sidebar(labels, body, track_rows, buf),
            None => body,
        };

        self.render_bars(&layout, bars_area, track_rows, buf);
    }
}

impl Widget for Chart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

    use crate::{Chart, ChartData, ChartType, DEFAULT_BACKGROUND_COLOR};

    fn weekdays() -> Vec<ChartData> {
        vec![
            ChartData::new("Mon", 300.34, None),
            ChartData::new("Tue", 93.0, None),
            ChartData::new("Wed", 634.0, None),
            ChartData::new("Thu", -82.1, None),
        ]
    }

    fn draw(chart: &Chart, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn divider_rows(buf: &Buffer) -> usize {
        (0..buf.area.height)
            .filter(|y| row(buf, *y).chars().all(|c| c == '─'))
            .count()
    }

    // 40x12: dividers on rows 0 and 11, track rows 1..=8, values on row 9,
    // labels on row 10. Sidebar takes columns 0..7, bars are 7 wide with a
    // one column gap starting at x = 7.
    #[test]
    fn test_weekday_example_render() {
        let buf = draw(&Chart::with_defaults(weekdays()), 40, 12);

        assert_eq!(divider_rows(&buf), 2);

        let labels = row(&buf, 10);
        let positions: Vec<usize> = ["Mon", "Tue", "Wed", "Thu"]
            .iter()
            .map(|label| labels.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(row(&buf, 9).contains("300.34"));
        assert!(row(&buf, 9).contains("-82.1"));

        assert!(row(&buf, 1).starts_with(" 634"));
        assert!(row(&buf, 4).starts_with(" 317"));
        assert!(row(&buf, 8).starts_with("   0"));
        assert_eq!(buf[(5, 1)].symbol(), "│");
    }

    #[test]
    fn test_fill_and_track_colors() {
        let buf = draw(&Chart::with_defaults(weekdays()), 40, 12);

        // Wed is the max: every track row filled
        for y in 1..=8 {
            assert_eq!(buf[(23, y)].bg, Color::Green);
        }

        // Thu is negative: nothing filled
        for y in 1..=8 {
            assert_eq!(buf[(31, y)].bg, DEFAULT_BACKGROUND_COLOR);
        }

        // Mon fills round(8 * 300.34 / 634) = 4 rows from the bottom
        assert_eq!(buf[(7, 4)].bg, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(buf[(7, 5)].bg, Color::Green);
        assert_eq!(buf[(7, 8)].bg, Color::Green);
    }

    #[test]
    fn test_override_color_is_painted() {
        let data = vec![
            ChartData::new("Sat", 222.0, None),
            ChartData::new("Sun", 222.0, Some(Color::Blue)),
        ];
        let chart = Chart::with_defaults(data)
            .color(Color::Cyan)
            .chart_type(ChartType::bar(0.0, false))
            .show_border_lines(false);
        let buf = draw(&chart, 10, 6);

        assert_eq!(buf[(0, 0)].bg, Color::Cyan);
        assert_eq!(buf[(5, 0)].bg, Color::Blue);
    }

    #[test]
    fn test_no_border_lines() {
        let buf = draw(&Chart::with_defaults(weekdays()).show_border_lines(false), 40, 12);
        assert_eq!(divider_rows(&buf), 0);
    }

    #[test]
    fn test_hidden_values_leave_only_labels() {
        let chart = Chart::with_defaults(weekdays()).show_value(false);
        let buf = draw(&chart, 40, 12);
        assert!(row(&buf, 10).contains("Wed"));
        assert!(!row(&buf, 9).contains("634"));
    }

    #[test]
    fn test_empty_chart_renders_scale_only() {
        let buf = draw(&Chart::with_defaults(Vec::new()), 20, 8);
        assert_eq!(divider_rows(&buf), 2);
        assert!(row(&buf, 1).starts_with(" 0"));
    }

    #[test]
    fn test_height_limits_painted_rows() {
        let chart = Chart::with_defaults(vec![ChartData::new("a", 5.0, None)])
            .height(32.0)
            .chart_type(ChartType::bar(8.0, false))
            .show_border_lines(false);
        assert_eq!(chart.desired_rows(), 3);

        let buf = draw(&chart, 10, 30);

        assert_eq!(buf[(0, 0)].bg, Color::Green);
        assert!(row(&buf, 2).contains('a'));
        for y in 3..30 {
            assert_eq!(row(&buf, y), " ".repeat(10));
            assert!((0..10).all(|x| buf[(x, y)].bg == Color::Reset));
        }
    }

    #[test]
    fn test_tiny_areas_do_not_panic() {
        let chart = Chart::with_defaults(weekdays());
        for (width, height) in [(0, 0), (1, 1), (3, 2), (8, 3), (40, 1), (2, 40)] {
            draw(&chart, width, height);
        }
    }

    #[test]
    fn test_render_outside_buffer_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        (&Chart::with_defaults(weekdays())).render(Rect::new(5, 2, 30, 30), &mut buf);
        Chart::with_defaults(weekdays()).render(Rect::new(20, 20, 5, 5), &mut buf);
    }
}
