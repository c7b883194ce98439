//! # Execution Context
//!
//! Shared state of one run. Probes running on different workers only ever
//! touch the console, the result list and the output file through a [`Ctx`],
//! and every [`Ctx`] operation runs under one lock. Two workers can therefore
//! never interleave partial lines or lose a result.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::console::Console;
use crate::sink::OutputSink;

pub struct Ctx {
    state: Mutex<CtxState>,
}

struct CtxState {
    successes: Vec<String>,
    sink: Option<OutputSink>,
    console: Box<dyn Console>,
    /// Last rendered transient line per key.
    status: HashMap<String, String>,
}

impl Ctx {
    pub fn new(console: Box<dyn Console>, sink: Option<OutputSink>) -> Self {
        Self {
            state: Mutex::new(CtxState {
                successes: Vec::new(),
                sink,
                console,
                status: HashMap::new(),
            }),
        }
    }

    /// Records a successful result and forwards it to the output file.
    pub fn scan_success(&self, result: impl Into<String>) {
        let result: String = result.into();
        let mut state = self.lock();

        if let Some(sink) = state.sink.as_mut() {
            sink.append(&result);
        }
        state.successes.push(result);
    }

    /// Prints a permanent line.
    pub fn log(&self, line: impl AsRef<str>) {
        self.lock().console.print_line(line.as_ref());
    }

    /// Shows `line` as the transient status of `key`, redrawn in place.
    pub fn log_replace(&self, key: &str, line: impl Into<String>) {
        let line: String = line.into();
        let mut state = self.lock();

        if state.status.get(key) == Some(&line) {
            return;
        }
        state.console.draw_status(key, &line);
        state.status.insert(key.to_string(), line);
    }

    /// Drops the transient status of `key`, if it has one.
    pub fn clear_status(&self, key: &str) {
        let mut state = self.lock();
        if state.status.remove(key).is_some() {
            state.console.clear_status(key);
        }
    }

    /// Successful results in completion order.
    pub fn successes(&self) -> Vec<String> {
        self.lock().successes.clone()
    }

    pub fn success_count(&self) -> usize {
        self.lock().successes.len()
    }

    /// Closes the output file, clears leftover status lines and finishes the console.
    pub(crate) fn finish(&self) -> Vec<String> {
        let mut state = self.lock();
        let CtxState {
            successes,
            sink,
            console,
            status,
        } = &mut *state;

        if let Some(sink) = sink.as_mut() {
            sink.close();
        }
        for key in status.drain().map(|(key, _)| key) {
            console.clear_status(&key);
        }
        console.finish();

        successes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, CtxState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
