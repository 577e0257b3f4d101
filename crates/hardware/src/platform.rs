//! Platform bring-up.
//!
//! Assembles the complete simulated platform from configuration. It performs:
//! 1. **Controller setup:** Creates the simulated energy controller.
//! 2. **Tree synthesis:** Builds the default hardware description tree
//!    (`/cpus/cpu-map/cluster<i>` plus the controller node).
//! 3. **Topology:** Builds the uniform CPU→package table.
//! 4. **Discovery:** Runs cluster discovery once against a fresh clock registry.

use std::sync::Arc;

use tracing::debug;

use crate::clk::discovery::{ENERGY_CTRL_COMPATIBLE, register_cluster_clocks};
use crate::clk::registry::{ClockHandle, ClockRegistry};
use crate::common::Result;
use crate::config::Config;
use crate::dt::{DeviceTree, Node};
use crate::ec::{EnergyController, SimEnergyCtrl};
use crate::topology::CpuTopology;

/// Assembled platform instance: the clock registry and the controller
/// backing every registered clock.
#[derive(Debug)]
pub struct Platform {
    registry: ClockRegistry,
    ctrl: Arc<SimEnergyCtrl>,
}

impl Platform {
    /// Brings the platform up from configuration.
    ///
    /// Discovery runs exactly once, on the calling thread, before any
    /// concurrent access to the registered clocks is possible.
    ///
    /// # Errors
    ///
    /// Propagates the first discovery or registration error; see
    /// [`register_cluster_clocks`].
    pub fn bring_up(config: &Config) -> Result<Self> {
        let ctrl = Arc::new(SimEnergyCtrl::new(&config.energy_ctrl));
        let tree = Self::default_device_tree(config);
        let topology = CpuTopology::uniform(
            config.energy_ctrl.clusters,
            config.topology.cpus_per_cluster,
        );
        let mut registry = ClockRegistry::new();

        let oracle: Arc<dyn EnergyController> = ctrl.clone();
        let registered = register_cluster_clocks(&tree, &topology, &oracle, &mut registry)?;
        debug!(registered, "platform bring-up complete");

        Ok(Self { registry, ctrl })
    }

    /// Synthesizes the default hardware description tree for a configuration.
    ///
    /// The tree carries the energy controller node and a `cpu-map` with one
    /// `cluster<i>` child per configured cluster, so discovery takes the
    /// preferred strategy.
    pub fn default_device_tree(config: &Config) -> DeviceTree {
        let mut map = Node::new("cpu-map");
        for cluster in 0..config.energy_ctrl.clusters {
            map = map.with_child(Node::new(format!("cluster{cluster}")));
        }
        let cpus = Node::new("cpus").with_child(map);
        let soc = Node::new("soc").with_child(
            Node::new("energy-ctrl")
                .with_property("compatible", format!("{ENERGY_CTRL_COMPATIBLE}\0").into_bytes()),
        );
        DeviceTree::new(Node::new("").with_child(cpus).with_child(soc))
    }

    /// Looks a cluster clock up by its alias (e.g. `"cpu-cluster.0"`).
    pub fn clock(&self, alias: &str) -> Option<ClockHandle> {
        self.registry.lookup(alias)
    }

    /// Returns the clock registry.
    pub fn registry(&self) -> &ClockRegistry {
        &self.registry
    }

    /// Returns the energy controller.
    pub fn controller(&self) -> &Arc<SimEnergyCtrl> {
        &self.ctrl
    }
}
