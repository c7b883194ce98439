//! TCP dialing with a deadline.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum DialError {
    #[error("dial timed out")]
    Timeout,
    #[error("dial failed: {0}")]
    Connect(#[from] io::Error),
}

impl DialError {
    /// Timeouts are the only dial errors worth retrying.
    pub fn is_timeout(&self) -> bool {
        match self {
            DialError::Timeout => true,
            DialError::Connect(e) => e.kind() == io::ErrorKind::TimedOut,
        }
    }
}

/// Opens TCP connections for the probes.
#[async_trait]
pub trait Dialer: Send + Sync {
    async fn dial(&self, host: &str, port: u16, limit: Duration) -> Result<TcpStream, DialError>;
}

/// Resolves `host` and connects, giving up after `limit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpDialer;

#[async_trait]
impl Dialer for TcpDialer {
    async fn dial(&self, host: &str, port: u16, limit: Duration) -> Result<TcpStream, DialError> {
        match timeout(limit, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => Err(DialError::Connect(e)),
            Err(_elapsed) => Err(DialError::Timeout),
        }
    }
}

/// Address of the remote end, IPv4-mapped IPv6 shown as plain IPv4.
pub fn peer_ip(stream: &TcpStream) -> String {
    stream
        .peer_addr()
        .map(|addr: SocketAddr| addr.ip().to_canonical().to_string())
        .unwrap_or_else(|_| String::from("-"))
}
