//! Row of choice buttons plus the reset button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, Button};

/// Render the four buttons side by side, highlighting the focused one.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, Button::ALL.len() as u32); 4])
        .split(area);

    let focused = app_state.focused();

    for (button, chunk) in Button::ALL.into_iter().zip(chunks.iter()) {
        let is_focused = button == focused;

        let (label_style, border_style) = if is_focused {
            (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (Style::default().fg(Color::White), Style::default())
        };

        let line = Line::from(vec![
            Span::styled(button.label(), label_style),
            Span::styled(
                format!(" [{}]", button.shortcut()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(paragraph, *chunk);
    }
}
