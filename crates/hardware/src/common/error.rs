//! Error definitions for the performance-clock subsystem.
//!
//! This module defines the single error enum used across the clock framework,
//! the energy controller, and cluster discovery. It provides:
//! 1. **Clock Errors:** Invalid names, registry exhaustion, and registration rejection.
//! 2. **Controller Errors:** I/O failures when querying or commanding a cluster.
//! 3. **Discovery Errors:** Missing tree nodes that abort the discovery run.
//!
//! Tree probing misses that merely drive strategy fallback are represented as
//! `None` from tree queries and recovered locally; they never surface here.

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the clock framework, the energy controller, and discovery.
///
/// Discovery aborts on the first error in a branch; there are no retries
/// anywhere in this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A clock was constructed with an empty name.
    #[error("clock name must be non-empty")]
    InvalidName,

    /// The clock registry refused a new entry because its capacity is exhausted.
    #[error("clock registry capacity exhausted")]
    OutOfMemory,

    /// The clock framework rejected a registration or alias binding.
    ///
    /// The associated value is the offending clock or alias name.
    #[error("clock registration failed for '{0}'")]
    Registration(String),

    /// The energy controller failed to read or write a cluster's performance level.
    ///
    /// The associated value is the cluster id addressed by the failed operation.
    #[error("energy controller i/o failure on cluster {0}")]
    Io(u32),

    /// The hardware description tree has no `/cpus` node.
    ///
    /// This is fatal for discovery; no fallback strategy can run without it.
    #[error("no CPU information in the device tree")]
    CpusNodeMissing,

    /// No node compatible with the energy controller exists anywhere in the tree.
    ///
    /// This is the global discovery gate; nothing is registered when it fails.
    #[error("no energy controller node in the device tree")]
    MissingController,
}
