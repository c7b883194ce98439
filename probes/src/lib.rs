//! # Scan Modes
//!
//! Concrete [`Probe`](bugscan_core::Probe) implementations:
//!
//! * [`ping`]: plain TCP connect to `host:port`.
//! * [`sni`]: TCP connect to `host:443` followed by a TLS handshake that
//!   presents the host as SNI, with certificate checks disabled.
//!
//! Jobs for both modes carry the hostname as a `String` payload.

pub mod dial;
pub mod ping;
pub mod sni;
pub mod tls;

pub use ping::{PingOptions, PingProbe};
pub use sni::{SniOptions, SniProbe};
