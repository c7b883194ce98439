//! Live terminal board.
//!
//! Every in-flight job that reported a transient status gets its own spinner
//! line, redrawn in place. Permanent lines and log output are printed above
//! the spinners through [`MultiProgress::suspend`], so they never tear a
//! spinner line apart.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::OnceLock;

use bugscan_core::console::Console;
use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::terminal::colors;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub(crate) static BOARD: OnceLock<MultiProgress> = OnceLock::new();

pub fn get_board() -> &'static MultiProgress {
    BOARD.get_or_init(MultiProgress::new)
}

fn status_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// [`Console`] backed by the global [`MultiProgress`].
pub struct BoardConsole {
    lines: HashMap<String, ProgressBar>,
    style: ProgressStyle,
    live: bool,
}

impl BoardConsole {
    pub fn new() -> Self {
        Self::with_live(console::Term::stderr().is_term())
    }

    fn with_live(live: bool) -> Self {
        Self {
            lines: HashMap::new(),
            style: status_style(),
            live,
        }
    }
}

impl Default for BoardConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for BoardConsole {
    fn print_line(&mut self, line: &str) {
        get_board().suspend(|| println!("{line}"));
    }

    fn draw_status(&mut self, key: &str, line: &str) {
        if !self.live {
            return;
        }

        let style: &ProgressStyle = &self.style;
        let pb: &ProgressBar = self.lines.entry(key.to_string()).or_insert_with(|| {
            let pb: ProgressBar = get_board().add(ProgressBar::new_spinner());
            pb.set_style(style.clone());
            pb.set_prefix(key.color(colors::TEXT_DEFAULT).to_string());
            pb
        });
        pb.set_message(line.color(colors::STATUS).to_string());
        // Spinners advance on redraw; a steady tick would cost one thread per bar.
        pb.tick();
    }

    fn clear_status(&mut self, key: &str) {
        if let Some(pb) = self.lines.remove(key) {
            pb.finish_and_clear();
            get_board().remove(&pb);
        }
    }

    fn finish(&mut self) {
        for (_, pb) in self.lines.drain() {
            pb.finish_and_clear();
            get_board().remove(&pb);
        }
    }
}

/// Routes log output above the live spinners.
pub struct BoardWriter;

impl Write for BoardWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_board().suspend(|| io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
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
