//! # TCP Ping
//!
//! One connect attempt to `host:port`. Reaching the host is the whole test.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bugscan_common::utils::format;
use bugscan_core::{Ctx, Job, Probe};

use crate::dial::{self, Dialer, TcpDialer};

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
pub struct PingOptions {
    pub port: u16,
    pub timeout: Duration,
}

impl Default for PingOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct PingProbe {
    opts: PingOptions,
    dialer: Arc<dyn Dialer>,
}

impl PingProbe {
    pub fn new(opts: PingOptions) -> Self {
        Self {
            opts,
            dialer: Arc::new(TcpDialer),
        }
    }

    pub fn with_dialer(mut self, dialer: impl Dialer + 'static) -> Self {
        self.dialer = Arc::new(dialer);
        self
    }
}

/// One job per host, named and keyed by the host itself.
pub fn jobs(hosts: impl IntoIterator<Item = String>) -> impl Iterator<Item = Job> {
    hosts.into_iter().map(|host| Job::new(host.clone(), host))
}

#[async_trait]
impl Probe for PingProbe {
    async fn probe(&self, ctx: Arc<Ctx>, job: Job) {
        let Some(host) = job.payload::<String>() else {
            return;
        };

        let Ok(stream) = self
            .dialer
            .dial(host, self.opts.port, self.opts.timeout)
            .await
        else {
            return;
        };

        let row: String = format::row(&dial::peer_ip(&stream), host);
        drop(stream);

        ctx.scan_success(row.clone());
        ctx.log(row);
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
