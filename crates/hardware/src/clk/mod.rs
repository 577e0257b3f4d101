//! Clock framework and the energy-ctrl clock driver.
//!
//! This module contains the driver half of the subsystem:
//! 1. **Registry:** Named clock devices, registration flags, and alias bindings.
//! 2. **Adapter:** `EnergyCtrlClock`, exposing a cluster's performance level as a clock rate.
//! 3. **Discovery:** Cluster enumeration from the description tree and one-shot registration.

/// Three-strategy cluster discovery and registration.
pub mod discovery;

/// The energy-ctrl clock adapter.
pub mod energy_ctrl;

/// Clock devices, flags, operations, and the registry.
pub mod registry;

pub use discovery::{ENERGY_CTRL_COMPATIBLE, register_cluster_clocks};
pub use energy_ctrl::{EnergyCtrlClock, PERF_RATE_SCALE};
pub use registry::{Clock, ClockFlags, ClockHandle, ClockOps, ClockRegistry};
