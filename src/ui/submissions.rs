//! Submission list rendering

use crate::app::App;
use crate::state::DisplayLine;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw accepted records followed by validation errors in red
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Submissions ({}) ", app.form.submissions().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = app.form.display_lines();
    if lines.is_empty() {
        let empty = Paragraph::new("No submissions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = lines
        .into_iter()
        .map(|line| match line {
            DisplayLine::Record(text) => ListItem::new(Line::from(text)),
            DisplayLine::Error(text) => {
                ListItem::new(Line::from(text)).style(Style::default().fg(Color::Red))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
