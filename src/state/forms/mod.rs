//! Form domain layer
//!
//! Controlled fields, the submit handler and the projection rendered by the
//! submissions view.

mod event;
mod field;
mod form_state;

pub use event::{FormEvent, SubmitEvent, SubmitTrigger};
pub use field::{FieldId, FormField};
pub use form_state::{
    DisplayLine, Form, NameForm, Record, ValidationError, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME,
};
