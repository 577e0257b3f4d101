//! Energy-ctrl clock adapter.
//!
//! Adapts the per-cluster performance oracle to the clock framework's
//! operation set. The adapter is pure forwarding:
//! 1. **Recalc:** Read the cluster's level and scale it to rate units.
//! 2. **Round:** Identity; the oracle accepts arbitrary values and owns any clamping.
//! 3. **Set:** Scale the rate back to oracle units and forward it verbatim.
//!
//! Rates are never cached: the device is registered with `RATE_NOCACHE` so
//! every read goes back to the oracle.

use std::sync::Arc;

use tracing::error;

use crate::clk::registry::{ClockFlags, ClockHandle, ClockOps, ClockRegistry};
use crate::common::Result;
use crate::ec::EnergyController;

/// Scale between oracle-native performance levels (MHz) and clock rates.
pub const PERF_RATE_SCALE: u64 = 1000;

/// Clock device backed by one cluster's performance state.
pub struct EnergyCtrlClock {
    /// Cluster id; immutable, the sole key used to address the oracle.
    cluster: u32,
    /// Shared handle to the oracle; serialization is the oracle's concern.
    ctrl: Arc<dyn EnergyController>,
}

impl std::fmt::Debug for EnergyCtrlClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyCtrlClock")
            .field("cluster", &self.cluster)
            .finish_non_exhaustive()
    }
}

impl EnergyCtrlClock {
    /// Constructs and registers an energy-ctrl clock.
    ///
    /// The clock is registered as a root clock (zero parents) with
    /// `RATE_NOCACHE` set, under the given name.
    ///
    /// # Arguments
    ///
    /// * `registry` - The clock framework table to register with.
    /// * `name` - Clock name; must be non-empty.
    /// * `cluster` - Cluster id the clock addresses.
    /// * `ctrl` - The performance oracle.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidName`] for an empty name (nothing is
    /// allocated), or the registry's rejection. Callers treat any failure
    /// here as fatal for the rest of their discovery branch.
    pub fn register(
        registry: &mut ClockRegistry,
        name: &str,
        cluster: u32,
        ctrl: Arc<dyn EnergyController>,
    ) -> Result<ClockHandle> {
        if name.is_empty() {
            error!(cluster, "invalid clock name");
            return Err(crate::common::Error::InvalidName);
        }
        let ops = Box::new(Self { cluster, ctrl });
        registry
            .register(name, ClockFlags::ROOT | ClockFlags::RATE_NOCACHE, ops)
            .inspect_err(|err| error!(name, cluster, %err, "clock registration failed"))
    }
}

impl ClockOps for EnergyCtrlClock {
    /// Queries the oracle and scales the level to rate units.
    fn recalc_rate(&self, _parent_rate: u64) -> Result<u64> {
        match self.ctrl.performance(self.cluster) {
            Ok(level) => Ok(u64::from(level) * PERF_RATE_SCALE),
            Err(err) => {
                // Log before returning; a silent read failure is
                // indistinguishable from a zero rate to callers that only
                // observe diagnostics.
                error!(cluster = self.cluster, %err, "performance level read failed");
                Err(err)
            }
        }
    }

    /// Identity: the oracle accepts arbitrary performance values, so there is
    /// no discrete frequency table to snap to.
    fn round_rate(&self, desired: u64, _parent_rate: u64) -> u64 {
        desired
    }

    /// Scales the rate back to oracle units and forwards the request.
    fn set_rate(&self, rate: u64, _parent_rate: u64) -> Result<()> {
        self.ctrl
            .set_performance(self.cluster, (rate / PERF_RATE_SCALE) as u32)
    }
}
