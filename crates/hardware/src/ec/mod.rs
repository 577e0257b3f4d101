//! Energy controller interface.
//!
//! The energy controller is the performance oracle behind every cluster
//! clock: it holds one performance level per cluster and accepts read and
//! write requests keyed by cluster id. This module provides:
//! 1. **Trait:** `EnergyController`, the two-method capability the clock adapter consumes.
//! 2. **Simulation:** `SimEnergyCtrl`, an in-memory controller with range clamping.
//!
//! The trait is the substitution seam: tests drive the clock adapter and
//! discovery with doubles instead of the simulated controller.

use crate::common::Result;

/// The simulated energy controller.
pub mod sim;

pub use sim::SimEnergyCtrl;

/// Per-cluster performance oracle.
///
/// Implementations own all serialization for concurrent access to one
/// cluster's state; callers never synchronize around these methods. Both
/// operations are synchronous and return-or-fail immediately.
pub trait EnergyController: Send + Sync {
    /// Reads the current performance level of `cluster`, in oracle-native
    /// units (MHz).
    fn performance(&self, cluster: u32) -> Result<u32>;

    /// Requests a new performance level for `cluster`, in oracle-native
    /// units (MHz).
    fn set_performance(&self, cluster: u32, level: u32) -> Result<()>;
}
