//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `name_form`: The first/last name form

mod field_renderer;
mod name_form;

pub use name_form::{draw_name_form, slot_areas};
