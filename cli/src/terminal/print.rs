use bugscan_common::utils::format;
use bugscan_common::{config::Config, info, success, warn};
use bugscan_core::ScanSummary;
use colored::*;

use crate::terminal::{board, colors};

/// Prints the column titles and rule above the result rows.
pub fn table_header(host_title: &str) {
    let [titles, rule] = format::header(host_title);
    board::get_board().suspend(|| {
        println!("{titles}");
        println!("{rule}");
    });
}

pub fn summary(summary: &ScanSummary, cfg: &Config) {
    let found: ColoredString = format!("{} hosts", summary.successes.len()).green().bold();
    let total: ColoredString = summary.attempted.to_string().bold();
    let elapsed: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).yellow();
    let sep: ColoredString = "─".repeat(3).color(colors::SEPARATOR);

    success!("{sep} Scan complete: {found} of {total} responded in {elapsed}");

    if summary.faulted > 0 {
        warn!("{} probes crashed and were skipped", summary.faulted);
    }

    if let Some(path) = &cfg.output
        && !summary.successes.is_empty()
    {
        info!("Results saved to {}", path.display().to_string().color(colors::ACCENT));
    }
}
