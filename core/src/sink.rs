//! # Output Sink
//!
//! Persists successful rows to a file as they arrive. Each row is written
//! with a single `write_all` straight to the file, so an interrupted run
//! leaves every row recorded so far intact.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bugscan_common::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot open output file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
enum SinkState {
    Open(File),
    Failed,
    Closed,
}

#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    state: SinkState,
    written: usize,
}

impl OutputSink {
    /// Creates (or truncates) the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            state: SinkState::Open(file),
            written: 0,
        })
    }

    /// Appends one row followed by a newline.
    ///
    /// The first failure is logged and disables the sink; later rows are
    /// dropped silently.
    pub fn append(&mut self, line: &str) {
        let SinkState::Open(file) = &mut self.state else {
            return;
        };

        let mut record: Vec<u8> = Vec::with_capacity(line.len() + 1);
        record.extend_from_slice(line.as_bytes());
        record.push(b'\n');

        match file.write_all(&record) {
            Ok(()) => self.written += 1,
            Err(source) => {
                let err = SinkError::Write {
                    path: self.path.clone(),
                    source,
                };
                warn!("{err}; further results will only be shown on screen");
                self.state = SinkState::Failed;
            }
        }
    }

    pub fn close(&mut self) {
        if let SinkState::Open(file) = &mut self.state
            && let Err(source) = file.flush()
        {
            let err = SinkError::Write {
                path: self.path.clone(),
                source,
            };
            warn!("{err}");
        }
        self.state = SinkState::Closed;
    }

    /// Rows successfully handed to the file so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, SinkState::Failed)
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        self.close();
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
