//! # Console Port
//!
//! The engine never writes to the terminal directly. Every line goes through a
//! [`Console`], always called while the [`Ctx`](crate::Ctx) lock is held, so
//! implementations don't need their own synchronization for ordering.

use std::sync::{Arc, Mutex, PoisonError};

/// Destination of permanent result lines and transient per-job status lines.
pub trait Console: Send {
    /// Prints a line that stays on screen.
    fn print_line(&mut self, line: &str);

    /// Shows `line` as the status of `key`, replacing its previous status in place.
    fn draw_status(&mut self, key: &str, line: &str);

    /// Removes the status line of `key`.
    fn clear_status(&mut self, key: &str);

    /// Called once when the run is over.
    fn finish(&mut self) {}
}

/// Prints permanent lines to stdout and drops transient ones.
///
/// Used when nothing better is configured, e.g. when output is piped.
#[derive(Debug, Default)]
pub struct PlainConsole;

impl Console for PlainConsole {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn draw_status(&mut self, _key: &str, _line: &str) {}

    fn clear_status(&mut self, _key: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Line(String),
    Status { key: String, line: String },
    Cleared(String),
}

/// Keeps everything it is given in memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    events: Arc<Mutex<Vec<ConsoleEvent>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Permanent lines only, in print order.
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConsoleEvent::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    /// Every status drawn for `key`, oldest first.
    pub fn statuses(&self, key: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConsoleEvent::Status { key: k, line } if k == key => Some(line),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ConsoleEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Console for MemoryConsole {
    fn print_line(&mut self, line: &str) {
        self.push(ConsoleEvent::Line(line.to_string()));
    }

    fn draw_status(&mut self, key: &str, line: &str) {
        self.push(ConsoleEvent::Status {
            key: key.to_string(),
            line: line.to_string(),
        });
    }

    fn clear_status(&mut self, key: &str) {
        self.push(ConsoleEvent::Cleared(key.to_string()));
    }
}
