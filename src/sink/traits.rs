//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::Record;

/// Receives every record the form accepts.
///
/// Called exactly once per successful submission, after the record has been
/// appended to the submission log. The form never looks at what the sink does.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn submit(&mut self, record: &Record);
}
