//! Simulated energy controller.
//!
//! An in-memory controller holding one performance level per cluster. Writes
//! are clamped into the configured `[min_level, max_level]` range; the clock
//! adapter above it never clamps. A single mutex over the level table
//! provides the serialization the `EnergyController` contract delegates to
//! its implementations.

use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::common::{Error, Result};
use crate::config::EnergyCtrlConfig;
use crate::ec::EnergyController;

/// Simulated per-cluster energy controller.
#[derive(Debug)]
pub struct SimEnergyCtrl {
    /// Current performance level of each cluster, indexed by cluster id.
    levels: Mutex<Vec<u32>>,
    /// Lowest accepted level; lower requests are clamped up.
    min_level: u32,
    /// Highest accepted level; higher requests are clamped down.
    max_level: u32,
}

impl SimEnergyCtrl {
    /// Creates a controller with `config.clusters` clusters, each starting at
    /// `config.boot_level`.
    pub fn new(config: &EnergyCtrlConfig) -> Self {
        Self {
            levels: Mutex::new(vec![config.boot_level; config.clusters as usize]),
            min_level: config.min_level,
            max_level: config.max_level,
        }
    }

    /// Returns the number of clusters this controller manages.
    pub fn cluster_count(&self) -> u32 {
        let levels = self.levels.lock().unwrap_or_else(PoisonError::into_inner);
        levels.len() as u32
    }
}

impl EnergyController for SimEnergyCtrl {
    /// Reads a cluster's current level; unknown cluster ids are I/O failures.
    fn performance(&self, cluster: u32) -> Result<u32> {
        let levels = self.levels.lock().unwrap_or_else(PoisonError::into_inner);
        levels
            .get(cluster as usize)
            .copied()
            .ok_or(Error::Io(cluster))
    }

    /// Writes a cluster's level, clamped into the accepted range.
    fn set_performance(&self, cluster: u32, level: u32) -> Result<()> {
        let clamped = level.clamp(self.min_level, self.max_level);
        let mut levels = self.levels.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = levels.get_mut(cluster as usize).ok_or(Error::Io(cluster))?;
        *slot = clamped;
        trace!(cluster, level = clamped, "performance level set");
        Ok(())
    }
}
