use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use simple_chart::style::{caption, dim_unless_focused};

use crate::app::App;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chart_rows = self
            .selected_preview()
            .map(|preview| preview.chart.desired_rows().saturating_add(2))
            .unwrap_or(3);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Title
                Constraint::Length(chart_rows),  // Chart
                Constraint::Min(0),              // Filler
                Constraint::Length(1),           // Help / status
            ])
            .split(area);

        let title = format!(
            " Simple Chart  {}/{} ",
            (self.selected + 1).min(self.previews.len()),
            self.previews.len()
        );
        Paragraph::new(title)
            .style(Style::default().bold())
            .render(chunks[0], buf);

        match self.selected_preview() {
            Some(preview) => {
                let container = Block::bordered()
                    .title(format!(" {} ", preview.title))
                    .border_type(BorderType::Rounded)
                    .border_style(dim_unless_focused(true, Style::default().fg(Color::Yellow)));

                let inner = container.inner(chunks[1]);
                container.render(chunks[1], buf);
                (&preview.chart).render(inner, buf);
            }
            None => {
                Paragraph::new("No charts configured")
                    .alignment(Alignment::Center)
                    .style(caption())
                    .render(chunks[1], buf);
            }
        }

        let footer = match &self.status {
            Some(status) => Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("[j/↓] next  [k/↑] previous  [r] reload  [q] quit")
                .style(caption()),
        };
        footer.render(chunks[3], buf);
    }
}
