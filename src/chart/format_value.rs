/// Display text for a chart value.
///
/// Whole numbers drop the decimal point (`300`, not `300.0`). Anything else
/// keeps up to two fractional digits with trailing zeros trimmed (`300.34`,
/// `-82.1`). Non-finite values and negative zero show as `0`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');

    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}
