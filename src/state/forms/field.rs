//! Form field value objects

/// Identifies one of the tracked text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::FirstName, FieldId::LastName];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
        }
    }
}

/// A single controlled text field.
///
/// The stored value is only ever replaced as a whole. Keystroke helpers such as
/// [`FormField::with_char`] compute the value an input would report without
/// touching the field itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    value: String,
}

impl FormField {
    /// Create a field holding an initial value
    pub fn new(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value wholesale
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Move the value out, leaving the field empty
    pub fn take_value(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Value the input reports after typing `c`
    pub fn with_char(&self, c: char) -> String {
        let mut next = String::with_capacity(self.value.len() + c.len_utf8());
        next.push_str(&self.value);
        next.push(c);
        next
    }

    /// Value the input reports after a backspace
    pub fn without_last_char(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }
}
