//! Cross-crate tests for the scanner engine and the probes.
//!
//! Everything runs against loopback servers spawned by the tests themselves.

#[cfg(test)]
mod probes;
