//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}
