//! Form state management and the name form

use super::event::{FormEvent, SubmitEvent};
use super::field::{FieldId, FormField};
use crate::sink::SubmissionSink;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FIRST_NAME: &str = "Beatriz";
pub const DEFAULT_LAST_NAME: &str = "Solórzano";

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Reasons a submission attempt is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required!")]
    FirstNameRequired,
}

/// Snapshot of the fields taken when a submission is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
}

impl Record {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One line of the submissions view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    Record(String),
    Error(String),
}

/// First/last name form with its submission log and validation errors.
///
/// Focus indices: 0 = first name, 1 = last name, 2 = Submit button.
#[derive(Debug, Clone)]
pub struct NameForm {
    first_name: FormField,
    last_name: FormField,
    pub active_field_index: usize,
    submissions: Vec<Record>,
    errors: Vec<String>,
}

impl NameForm {
    pub const SUBMIT_BUTTON_INDEX: usize = 2;

    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: FormField::new(FieldId::FirstName, first_name),
            last_name: FormField::new(FieldId::LastName, last_name),
            active_field_index: 0,
            submissions: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
        }
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).value()
    }

    /// Accepted records, oldest first
    pub fn submissions(&self) -> &[Record] {
        &self.submissions
    }

    /// Errors from the last rejected submission attempt
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Field that currently has focus, `None` when the Submit button is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        match self.active_field_index {
            0 => Some(FieldId::FirstName),
            1 => Some(FieldId::LastName),
            _ => None,
        }
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_BUTTON_INDEX
    }

    /// Controlled binding: the field takes exactly the value the input reported.
    /// Any edit also clears errors from a previous rejected submit.
    pub fn set_field(&mut self, id: FieldId, value: String) {
        self.field_mut(id).set_value(value);
        self.errors.clear();
    }

    /// Handle a submit request.
    ///
    /// The event's default action is always suppressed. On success the record is
    /// appended, the fields are emptied and the sink is invoked.
    pub fn submit(
        &mut self,
        event: &mut SubmitEvent,
        sink: &mut dyn SubmissionSink,
    ) -> Result<Record, ValidationError> {
        event.prevent_default();

        if let Err(err) = self.validate() {
            self.errors = vec![err.to_string()];
            return Err(err);
        }

        let record = Record {
            first_name: self.first_name.take_value(),
            last_name: self.last_name.take_value(),
        };
        self.submissions.push(record.clone());
        self.errors.clear();
        sink.submit(&record);

        Ok(record)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.value().is_empty() {
            return Err(ValidationError::FirstNameRequired);
        }
        Ok(())
    }

    /// Route an event to its handler.
    /// Returns the accepted record for a successful submit.
    pub fn handle_event(
        &mut self,
        event: &mut FormEvent,
        sink: &mut dyn SubmissionSink,
    ) -> Result<Option<Record>, ValidationError> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.set_field(*field, value.clone());
                Ok(None)
            }
            FormEvent::SubmitRequested(submit) => self.submit(submit, sink).map(Some),
        }
    }

    /// Lines for the submissions view: every record in submission order,
    /// then every error message.
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        self.submissions
            .iter()
            .map(|record| DisplayLine::Record(record.display_name()))
            .chain(self.errors.iter().cloned().map(DisplayLine::Error))
            .collect()
    }
}

impl Default for NameForm {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME)
    }
}

impl Form for NameForm {
    fn field_count(&self) -> usize {
        3 // first name, last name, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            // Index 2 is the Submit button, no FormField for it
            _ => None,
        }
    }
}
