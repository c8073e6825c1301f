use ratatui::style::{Color, Style, Stylize};

/// Small print for sidebar labels, value captions and bar labels.
pub fn caption() -> Style {
    Style::default().dim()
}

/// Horizontal and vertical separator lines.
pub fn divider() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}
