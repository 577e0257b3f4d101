//! Energy controller test doubles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use perfclk_core::common::{Error, Result};
use perfclk_core::ec::EnergyController;

/// Oracle that echoes back whatever was last set, per cluster.
///
/// Clusters that were never written report the configured initial level.
/// Unlike the simulated controller, nothing is clamped and every cluster id
/// is accepted, which keeps discovery tests independent of range policy.
pub struct EchoController {
    levels: Mutex<HashMap<u32, u32>>,
    initial_level: u32,
}

impl EchoController {
    pub fn new() -> Self {
        Self::with_initial_level(600)
    }

    pub fn with_initial_level(initial_level: u32) -> Self {
        Self {
            levels: Mutex::new(HashMap::new()),
            initial_level,
        }
    }

    /// Boxes the controller into the shared-handle form discovery expects.
    pub fn shared(self) -> Arc<dyn EnergyController> {
        Arc::new(self)
    }
}

impl Default for EchoController {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergyController for EchoController {
    fn performance(&self, cluster: u32) -> Result<u32> {
        let levels = self.levels.lock().unwrap();
        Ok(levels.get(&cluster).copied().unwrap_or(self.initial_level))
    }

    fn set_performance(&self, cluster: u32, level: u32) -> Result<()> {
        let mut levels = self.levels.lock().unwrap();
        levels.insert(cluster, level);
        Ok(())
    }
}

/// Oracle whose every operation fails with an I/O error.
pub struct FailingController;

impl FailingController {
    /// Boxes the controller into the shared-handle form discovery expects.
    pub fn shared(self) -> Arc<dyn EnergyController> {
        Arc::new(self)
    }
}

impl EnergyController for FailingController {
    fn performance(&self, cluster: u32) -> Result<u32> {
        Err(Error::Io(cluster))
    }

    fn set_performance(&self, cluster: u32, _level: u32) -> Result<()> {
        Err(Error::Io(cluster))
    }
}
