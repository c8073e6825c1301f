use tracing::{debug, warn};

use super::Chart;

impl Chart {
    /// Largest raw `value` in the data, sign included. `0.0` when there is no
    /// data, NaN values never win.
    pub fn shared_max(&self) -> f64 {
        let mut skipped = 0;
        let shared_max = self
            .data
            .iter()
            .map(|point| point.value())
            .filter(|value| {
                if value.is_nan() {
                    skipped += 1;
                }
                !value.is_nan()
            })
            .reduce(f64::max)
            .unwrap_or(0.0);

        if skipped > 0 {
            warn!(skipped, "NaN values left out of the chart scale");
        }

        shared_max
    }

    /// Share of the chart height a value fills. Division by a zero max, or
    /// any other non-finite result, yields an empty bar.
    pub(super) fn fill_ratio(value: f64, shared_max: f64) -> f64 {
        if shared_max == 0.0 {
            debug!(value, "zero chart max, drawing an empty bar");
            return 0.0;
        }

        let ratio = value / shared_max;
        if ratio.is_finite() {
            ratio
        } else {
            warn!(value, shared_max, "non-finite fill ratio, drawing an empty bar");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Chart, ChartData};

    fn chart(values: &[f64]) -> Chart {
        Chart::with_defaults(
            values.iter().map(|v| ChartData::new("x", *v, None)).collect()
        )
    }

    #[test]
    fn test_shared_max_is_raw_maximum() {
        assert_eq!(chart(&[300.34, 93.0, 634.0, -82.1]).shared_max(), 634.0);
    }

    #[test]
    fn test_shared_max_negative() {
        assert_eq!(chart(&[-5.0, -1.5, -30.0]).shared_max(), -1.5);
    }

    #[test]
    fn test_shared_max_empty() {
        assert_eq!(chart(&[]).shared_max(), 0.0);
    }

    #[test]
    fn test_shared_max_skips_nan() {
        assert_eq!(chart(&[f64::NAN, 3.0, 1.0]).shared_max(), 3.0);
    }

    #[test]
    fn test_fill_ratio_passes_through_uncapped() {
        assert_eq!(Chart::fill_ratio(317.0, 634.0), 0.5);
        assert_eq!(Chart::fill_ratio(-82.1, 634.0), -82.1 / 634.0);
        // Negative max flips the sign and can exceed one
        assert_eq!(Chart::fill_ratio(-2.0, -1.0), 2.0);
    }

    #[test]
    fn test_fill_ratio_zero_max() {
        assert_eq!(Chart::fill_ratio(0.0, 0.0), 0.0);
        assert_eq!(Chart::fill_ratio(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_fill_ratio_non_finite() {
        assert_eq!(Chart::fill_ratio(f64::NAN, 10.0), 0.0);
        assert_eq!(Chart::fill_ratio(f64::INFINITY, 10.0), 0.0);
    }
}
