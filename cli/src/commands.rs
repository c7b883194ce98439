pub mod pending;
pub mod ping;
pub mod sni;

use std::path::PathBuf;

use bugscan_common::config::{Config, DEFAULT_THREADS};
use bugscan_common::{info, warn};
use bugscan_core::{Job, Probe, QueueScanner, ScanSummary};
use clap::{Args, Parser, Subcommand};

use crate::terminal::{board::BoardConsole, print};

#[derive(Parser)]
#[command(name = "bugscan")]
#[command(about = "A fast bug host scanner with TCP ping and SNI modes.")]
pub struct CommandLine {
    /// Total threads to use
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan hosts using TCP ping
    Ping(PingArgs),
    /// Scan server name indication (SNI) list from file
    Sni(SniArgs),
    /// Scan hosts with direct requests
    Direct,
    /// Scan a proxy CIDR range against a target
    Proxy,
    /// Scan CDN SSL through proxy hosts
    #[command(name = "cdn-ssl")]
    CdnSsl,
}

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Domain list filename
    #[arg(short, long)]
    pub filename: PathBuf,

    /// Timeout in seconds
    #[arg(long, default_value_t = 2)]
    pub timeout: u64,

    /// Output result
    #[arg(short, long)]
    pub output: Option<String>,

    /// Port to use
    #[arg(long, default_value_t = 80)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct SniArgs {
    /// Domain list filename
    #[arg(short, long)]
    pub filename: PathBuf,

    /// Deep subdomain
    #[arg(short, long, default_value_t = 0)]
    pub deep: usize,

    /// Handshake timeout in seconds
    #[arg(long, default_value_t = 3)]
    pub timeout: u64,

    /// Output result
    #[arg(short, long)]
    pub output: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Prints the table header, drains `jobs` through `probe` and reports the outcome.
pub async fn run_scan<P>(
    probe: P,
    jobs: impl IntoIterator<Item = Job>,
    cfg: &Config,
    host_title: &str,
) -> ScanSummary
where
    P: Probe + 'static,
{
    print::table_header(host_title);

    let mut scanner: QueueScanner =
        QueueScanner::new(cfg.threads, probe).with_console(BoardConsole::new());
    for job in jobs {
        scanner.add(job);
    }
    if scanner.is_empty() {
        warn!("Host list is empty, nothing to scan");
    } else {
        info!("Scanning {} hosts with {} threads", scanner.len(), scanner.threads());
    }
    if let Some(path) = &cfg.output {
        scanner.set_output_file(path);
    }

    let summary: ScanSummary = scanner.start().await;
    print::summary(&summary, cfg);
    summary
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
