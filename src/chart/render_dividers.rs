use ratatui::{buffer::Buffer, layout::Rect, symbols};

use crate::style;

use super::{Chart, ChartLayout};

impl Chart {
    /// Draws the full-width lines above and below the bars and returns the
    /// area left between them.
    pub(super) fn render_dividers(
        &self,
        layout: &ChartLayout,
        area: Rect,
        buf: &mut Buffer,
    ) -> Rect {
        if layout.divider_count == 0 {
            return area;
        }

        // Both lines or none
        if area.height < 2 {
            return Rect { height: 0, ..area };
        }

        let line = symbols::line::HORIZONTAL.repeat(area.width as usize);
        buf.set_string(area.x, area.top(), &line, style::divider());
        buf.set_string(area.x, area.bottom() - 1, &line, style::divider());

        Rect {
            y: area.y + 1,
            height: area.height - 2,
            ..area
        }
    }
}
