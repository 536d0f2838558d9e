//! Name form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rects of the first name, last name and Submit slots inside the form panel
pub fn slot_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First name
            Constraint::Length(3),             // Last name
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Draw the first/last name form with its Submit button
pub fn draw_name_form(frame: &mut Frame, area: Rect, app: &App) {
    let [first, last, submit] = slot_areas(area);

    let block = Block::default()
        .title(" Name Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let active = app.form.active_field_id();
    for (slot, id) in [first, last].into_iter().zip(FieldId::ALL) {
        draw_field(frame, slot, app.form.field(id), active == Some(id));
    }

    render_button(
        frame,
        submit,
        "Submit",
        app.form.is_submit_active(),
        Color::Green,
    );
}
