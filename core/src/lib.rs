//! # Queue Scanner Engine
//!
//! A protocol-agnostic, bounded-concurrency worker pool for bulk host probing.
//!
//! * **[`job`]**: one unit of work and the FIFO queue holding them.
//! * **[`probe`]**: the contract every scan mode implements.
//! * **[`ctx`]**: the only channel through which running probes produce output.
//! * **[`console`]**: where permanent and transient lines end up.
//! * **[`sink`]**: incremental persistence of successful rows.
//! * **[`scanner`]**: the [`QueueScanner`](scanner::QueueScanner) that ties it together.

pub mod console;
pub mod ctx;
pub mod job;
pub mod probe;
pub mod scanner;
pub mod sink;

pub use ctx::Ctx;
pub use job::Job;
pub use probe::Probe;
pub use scanner::{QueueScanner, ScanSummary};
