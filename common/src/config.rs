use std::path::PathBuf;

pub const DEFAULT_THREADS: usize = 64;

/// Settings shared by every scan mode.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrent workers.
    pub threads: usize,
    /// Where successful rows are persisted. `None` keeps results on screen only.
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn new(threads: usize, output: Option<String>) -> Self {
        let output: Option<PathBuf> = output
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self { threads, output }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            output: None,
        }
    }
}
