use ratatui::{buffer::Buffer, style::{Color, Style}, layout::Rect};

use super::Chart;

impl Chart {
    /// Writes `text` centered in `width` columns starting at `x`, cut to fit.
    pub(super) fn put_centered(
        buf: &mut Buffer,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        style: Style,
    ) {
        if width == 0 {
            return;
        }

        let text: String = text.chars().take(width as usize).collect();
        let offset = (width - text.chars().count() as u16) / 2;
        buf.set_stringn(x + offset, y, &text, (width - offset) as usize, style);
    }

    /// Blanks every cell of `rect` and paints its background.
    pub(super) fn paint(buf: &mut Buffer, rect: Rect, color: Color) {
        let rect = rect.intersection(buf.area);
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}
