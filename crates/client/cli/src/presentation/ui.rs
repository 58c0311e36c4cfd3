//! UI rendering entry point composing all widgets.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{presentation::widgets, state::AppState};

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub app_state: &'a AppState,
    pub result_text: &'a str,
    pub score_text: &'a str,
}

/// Render the full game screen.
///
/// Layout, top to bottom: title, button row, result text, score text, footer.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Buttons
            Constraint::Length(4), // Result
            Constraint::Length(3), // Score
            Constraint::Min(0),
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0]);
    widgets::buttons::render(frame, chunks[1], ctx.app_state);

    let result = Paragraph::new(ctx.result_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    frame.render_widget(result, chunks[2]);

    let score = Paragraph::new(ctx.score_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(score, chunks[3]);

    widgets::footer::render(frame, chunks[5]);
}
