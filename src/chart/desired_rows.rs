use super::{Chart, POINTS_PER_COLUMN, POINTS_PER_ROW};

impl Chart {
    /// Terminal rows needed to honour `height`, never fewer than the rows the
    /// dividers, captions and a single track row take.
    pub fn desired_rows(&self) -> u16 {
        let options = &self.options;
        let dividers = if options.show_border_lines { 2 } else { 0 };
        let captions = if options.show_value { 2 } else { 1 };
        let minimum = dividers + captions + 1;

        let rows = (options.height / POINTS_PER_ROW).ceil();
        if rows.is_finite() && rows > minimum as f64 {
            rows.min(u16::MAX as f64) as u16
        } else {
            minimum
        }
    }

    /// Empty columns between neighbouring bars for a spacing in points.
    pub(super) fn gap_columns(spacing: f64) -> u16 {
        let columns = (spacing / POINTS_PER_COLUMN).round();
        if columns.is_finite() && columns > 0.0 {
            columns.min(u16::MAX as f64) as u16
        } else {
            0
        }
    }
}
