//! Sink that reports submissions through the tracing subscriber

use super::traits::SubmissionSink;
use crate::state::Record;

/// Logs each submitted record at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, record: &Record) {
        tracing::info!(
            first_name = %record.first_name,
            last_name = %record.last_name,
            "Form submitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_accepts_empty_last_name() {
        let mut sink = LogSink;
        sink.submit(&Record {
            first_name: "Ada".to_string(),
            last_name: String::new(),
        });
    }

    #[test]
    fn test_log_sink_as_trait_object() {
        let mut sink: Box<dyn SubmissionSink> = Box::new(LogSink);
        sink.submit(&Record {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        });
    }
}
