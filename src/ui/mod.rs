//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submissions;

use crate::app::App;
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, submissions_area, status_area) = layout::create_layout(frame.area());

    forms::draw_name_form(frame, form_area, app);
    submissions::draw(frame, submissions_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

/// Form slot (0 = first name, 1 = last name, 2 = Submit) drawn at a screen cell
pub fn form_slot_at(screen: Rect, column: u16, row: u16) -> Option<usize> {
    let (form_area, _, _) = layout::create_layout(screen);
    forms::slot_areas(form_area)
        .iter()
        .position(|slot| slot.contains(Position::new(column, row)))
}
