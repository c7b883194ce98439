//! # SNI Probe
//!
//! Dials `host:443` and performs a TLS handshake presenting the host as
//! server name. Only the dial is retried, and only when it timed out: a host
//! that accepts the connection but fails the handshake is a definitive
//! negative.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bugscan_common::network::host;
use bugscan_common::utils::format;
use bugscan_core::{Ctx, Job, Probe};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::dial::{self, Dialer, TcpDialer};
use crate::tls::{self, TlsError};

pub const TLS_PORT: u16 = 443;
pub const DIAL_TIMEOUT: Duration = Duration::from_secs(3);
pub const MAX_DIAL_ATTEMPTS: usize = 3;
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
pub struct SniOptions {
    /// Keep only this many trailing labels of each host. `0` keeps the host as is.
    pub deep: usize,
    pub handshake_timeout: Duration,
}

impl Default for SniOptions {
    fn default() -> Self {
        Self {
            deep: 0,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
        }
    }
}

pub struct SniProbe {
    port: u16,
    dial_timeout: Duration,
    handshake_timeout: Duration,
    dialer: Arc<dyn Dialer>,
    connector: TlsConnector,
}

impl SniProbe {
    pub fn new(opts: SniOptions) -> Result<Self, TlsError> {
        Ok(Self {
            port: TLS_PORT,
            dial_timeout: DIAL_TIMEOUT,
            handshake_timeout: opts.handshake_timeout,
            dialer: Arc::new(TcpDialer),
            connector: tls::insecure_connector()?,
        })
    }

    pub fn with_dialer(mut self, dialer: impl Dialer + 'static) -> Self {
        self.dialer = Arc::new(dialer);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_dial_timeout(mut self, limit: Duration) -> Self {
        self.dial_timeout = limit;
        self
    }

    /// Up to [`MAX_DIAL_ATTEMPTS`] tries, retrying on timeouts only.
    async fn dial(&self, ctx: &Ctx, key: &str, server_name: &str) -> Option<TcpStream> {
        for attempt in 1..=MAX_DIAL_ATTEMPTS {
            match self
                .dialer
                .dial(server_name, self.port, self.dial_timeout)
                .await
            {
                Ok(stream) => return Some(stream),
                Err(e) if e.is_timeout() => {
                    ctx.log_replace(key, format!("- Dial Timeout ({attempt}/{MAX_DIAL_ATTEMPTS})"));
                }
                Err(_) => return None,
            }
        }
        None
    }
}

/// One job per host after applying the subdomain depth.
pub fn jobs(hosts: impl IntoIterator<Item = String>, deep: usize) -> impl Iterator<Item = Job> {
    hosts.into_iter().map(move |line| {
        let server_name: String = host::trim_to_depth(&line, deep);
        Job::new(server_name.clone(), server_name)
    })
}

#[async_trait]
impl Probe for SniProbe {
    async fn probe(&self, ctx: Arc<Ctx>, job: Job) {
        let Some(server_name) = job.payload::<String>() else {
            return;
        };

        let Some(stream) = self.dial(&ctx, job.name(), server_name).await else {
            return;
        };
        let ip: String = dial::peer_ip(&stream);

        let Ok(_tls_stream) =
            tls::handshake(&self.connector, stream, server_name, self.handshake_timeout).await
        else {
            return;
        };

        let row: String = format::row(&ip, server_name);
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
