use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the host list. These abort a run before any probe starts.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read host list '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
