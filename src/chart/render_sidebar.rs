use ratatui::{buffer::Buffer, layout::Rect, symbols};

use crate::style;

use super::{Chart, SidebarLabels};

impl Chart {
    /// Draws the max / half / zero column with its separator and returns the
    /// area left for the bars.
    ///
    /// Layout, left to right: one column padding, the right-aligned labels,
    /// one column padding, the `│` separator, one column gap.
    pub(super) fn render_sidebar(
        &self,
        labels: &SidebarLabels,
        area: Rect,
        track_rows: u16,
        buf: &mut Buffer,
    ) -> Rect {
        let label_width = labels.width();
        let sidebar_width = label_width + 2;
        let taken = sidebar_width + 2;

        if area.width <= taken {
            return Rect { width: 0, ..area };
        }

        if track_rows > 0 {
            let top = area.y;
            let bottom = area.y + track_rows - 1;
            let middle = area.y + (track_rows - 1) / 2;

            // Drawn bottom-up so the max label wins on very short charts
            for (text, y) in [(&labels.zero, bottom), (&labels.mid, middle), (&labels.max, top)] {
                let indent = label_width - text.chars().count() as u16;
                buf.set_string(area.x + 1 + indent, y, text, style::caption());
            }
        }

        let separator_x = area.x + sidebar_width;
        for y in area.top()..area.bottom() {
            buf.set_string(separator_x, y, symbols::line::VERTICAL, style::divider());
        }

        Rect {
            x: area.x + taken,
            width: area.width - taken,
            ..area
        }
    }
}
