//! # Host List Input
//!
//! Reads the newline-delimited list of hostnames a scan is driven by.

use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::warn;

/// Reads `path` and returns one entry per non-blank line, in file order.
///
/// Surrounding whitespace (including `\r` from CRLF files) is removed.
/// Duplicates are kept; de-duplication is up to the caller. Lines that are
/// not valid UTF-8 are skipped with a single warning for the whole file.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path: &Path = path.as_ref();
    let content: Vec<u8> = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (hosts, skipped) = parse_lines(&content);
    if skipped > 0 {
        warn!(
            "Skipped {skipped} unreadable line(s) in '{}' (not valid UTF-8)",
            path.display()
        );
    }

    Ok(hosts)
}

/// Returns the usable lines and how many were dropped for bad encoding.
fn parse_lines(content: &[u8]) -> (Vec<String>, usize) {
    let mut hosts: Vec<String> = Vec::new();
    let mut skipped: usize = 0;

    for raw in content.split(|&b| b == b'\n') {
        let Ok(line) = std::str::from_utf8(raw) else {
            skipped += 1;
            continue;
        };
        let line: &str = line.trim();
        if !line.is_empty() {
            hosts.push(line.to_string());
        }
    }

    (hosts, skipped)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
