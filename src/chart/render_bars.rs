use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::style;

use super::{Chart, ChartLayout};

impl Chart {
    /// Draws every bar side by side: the track with its filled part, then the
    /// value caption and the label underneath.
    pub(super) fn render_bars(
        &self,
        layout: &ChartLayout,
        area: Rect,
        track_rows: u16,
        buf: &mut Buffer,
    ) {
        if layout.bars.is_empty() || area.is_empty() {
            return;
        }

        let gap = Self::gap_columns(layout.spacing);
        let (bar_width, gap) = Self::fit_bars(layout.bars.len(), area.width, gap);
        let step = bar_width as usize + gap as usize;

        for (i, bar) in layout.bars.iter().enumerate() {
            let x = (area.x as usize).saturating_add(i.saturating_mul(step));
            if x.saturating_add(bar_width as usize) > area.right() as usize {
                debug!(drawn = i, total = layout.bars.len(), "bars cut off by width");
                break;
            }
            let x = x as u16;

            if track_rows > 0 {
                Self::paint(buf, Rect::new(x, area.y, bar_width, track_rows), bar.track_color);

                let filled = Self::filled_rows(track_rows, bar.fill_ratio);
                if filled > 0 {
                    let fill = Rect::new(x, area.y + track_rows - filled, bar_width, filled);
                    Self::paint(buf, fill, bar.fill_color);
                }
            }

            let mut caption_y = area.y + track_rows;
            if let Some(value_text) = &bar.value_text {
                if caption_y < area.bottom() {
                    Self::put_centered(buf, x, caption_y, bar_width, value_text, style::caption());
                }
                caption_y += 1;
            }

            if caption_y < area.bottom() {
                Self::put_centered(buf, x, caption_y, bar_width, &bar.label, style::caption());
            }
        }
    }

    /// Bar width and gap for `count` bars in `width` columns. A single bar
    /// has no gap, and the gap is dropped when it leaves no room for one
    /// column per bar.
    pub(super) fn fit_bars(count: usize, width: u16, gap: u16) -> (u16, u16) {
        let count = count.max(1) as u64;
        let width = width as u64;
        let gap = if count == 1 { 0 } else { (gap as u64).min(width) };
        let gaps = gap.saturating_mul(count - 1);

        if width >= gaps.saturating_add(count) {
            (((width - gaps) / count) as u16, gap as u16)
        } else {
            ((width / count).max(1) as u16, 0)
        }
    }

    /// Track rows covered by the fill. The ratio is clamped here only, since
    /// a cell can't be drawn outside the track.
    pub(super) fn filled_rows(track_rows: u16, fill_ratio: f64) -> u16 {
        (track_rows as f64 * fill_ratio.clamp(0.0, 1.0)).round() as u16
    }
}
