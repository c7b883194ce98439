//! Shared building blocks for the `bugscan` workspace.
//!
//! Everything in here is free of network I/O: run configuration, the host
//! list reader, result row formatting and the logging macros used by the
//! other crates.

pub mod config;
pub mod error;
pub mod input;
pub mod log;
pub mod network;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;
