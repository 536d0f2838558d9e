//! Source of terminal events consumed by the event loop

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Abstraction over the terminal event queue so the loop can be driven in tests
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Wait up to `timeout` for the next event
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
