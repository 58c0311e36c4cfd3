//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let hint = Style::default().fg(Color::Gray);

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", key),
            Span::styled(" Focus  ", hint),
            Span::styled("Enter", key),
            Span::styled(" Press  ", hint),
            Span::styled("r/p/s", key),
            Span::styled(" Play  ", hint),
            Span::styled("x", key),
            Span::styled(" Reset  ", hint),
            Span::styled("q/Esc", key),
            Span::styled(" Quit", hint),
        ]),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
