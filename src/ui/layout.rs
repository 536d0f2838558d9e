//! Layout components (panels, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Submit shortcut display for the status bar
const SUBMIT_SHORTCUT: &str = "^S";

/// Split the screen into form panel, submissions panel and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width / 2),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(
            " Tab:next  Enter/{}:submit  ^U:clear  Esc:quit",
            SUBMIT_SHORTCUT
        ),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
