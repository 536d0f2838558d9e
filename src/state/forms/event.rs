//! Events dispatched from the host to the form

use super::field::FieldId;

/// What initiated a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitTrigger {
    /// Enter or the submit shortcut while editing a field
    #[default]
    Key,
    /// The Submit button
    Button,
}

/// A submit request carrying the host's default-action flag.
///
/// Unless a handler calls [`SubmitEvent::prevent_default`], the host performs its
/// default action for a submit, which reloads the form from its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitEvent {
    pub trigger: SubmitTrigger,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(trigger: SubmitTrigger) -> Self {
        Self {
            trigger,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Events consumed by the form handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An input reported its current value
    FieldChanged { field: FieldId, value: String },
    SubmitRequested(SubmitEvent),
}

impl FormEvent {
    pub fn field_changed(field: FieldId, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }

    pub fn submit(trigger: SubmitTrigger) -> Self {
        Self::SubmitRequested(SubmitEvent::new(trigger))
    }
}
