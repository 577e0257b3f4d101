//! Cluster discovery and clock registration.
//!
//! Enumerates CPU clusters from the hardware description tree and registers
//! one energy-ctrl clock per cluster, binding a lookup alias for each. Three
//! strategies are tried in decreasing order of specificity; the first one
//! that yields data wins and none are mixed:
//! 1. **Topology map:** dense `cluster<i>` children under `/cpus/cpu-map`.
//! 2. **Legacy clusters node:** repeated `cluster` children under `/clusters`,
//!    each carrying a one-cell `reg` property.
//! 3. **CPU topology:** physical package ids of every possible CPU, with
//!    duplicate suppression by alias lookup.
//!
//! A registration failure aborts the remaining candidates of the running
//! strategy; clocks registered earlier in the run stay registered.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::clk::energy_ctrl::EnergyCtrlClock;
use crate::clk::registry::{ClockHandle, ClockRegistry};
use crate::common::{Error, Result};
use crate::dt::{DeviceTree, Node};
use crate::ec::EnergyController;
use crate::topology::CpuTopology;

/// Compatible string identifying the simulated energy controller node.
pub const ENERGY_CTRL_COMPATIBLE: &str = "sim,energy-ctrl";

/// Returns the clock name for a cluster id.
fn cluster_clock_name(cluster: u32) -> String {
    format!("cpu-cluster.{cluster}")
}

/// Registers one cluster clock and binds its lookup alias.
///
/// Alias binding is part of the atomic register step: a binding failure is
/// reported exactly like a construction failure.
fn register_one(
    registry: &mut ClockRegistry,
    name: &str,
    cluster: u32,
    ctrl: &Arc<dyn EnergyController>,
) -> Result<ClockHandle> {
    let clock = EnergyCtrlClock::register(registry, name, cluster, Arc::clone(ctrl))?;
    registry.bind_alias(&clock, name)?;
    debug!(name, cluster, "registered clock");
    Ok(clock)
}

/// Discovers CPU clusters and registers one clock per cluster.
///
/// Invoked once during platform initialization, before any concurrent access
/// to the registered clocks is possible.
///
/// # Arguments
///
/// * `tree` - The hardware description tree.
/// * `topology` - CPU topology, consulted only by the last-resort strategy.
/// * `ctrl` - The performance oracle backing every registered clock.
/// * `registry` - The clock framework table to register with.
///
/// # Returns
///
/// The number of clocks registered by the selected strategy.
///
/// # Errors
///
/// [`Error::MissingController`] when no compatible controller node exists
/// anywhere in the tree (the global gate; nothing is registered),
/// [`Error::CpusNodeMissing`] when `/cpus` is absent (fatal, no fallback),
/// and any registration failure from the running strategy. Already
/// registered clocks are not rolled back on failure.
pub fn register_cluster_clocks(
    tree: &DeviceTree,
    topology: &CpuTopology,
    ctrl: &Arc<dyn EnergyController>,
    registry: &mut ClockRegistry,
) -> Result<usize> {
    if tree.find_compatible(ENERGY_CTRL_COMPATIBLE).is_none() {
        error!("no energy controller in the device tree");
        return Err(Error::MissingController);
    }

    let Some(cpus) = tree.find_by_path("/cpus") else {
        error!("no CPU information in the device tree");
        return Err(Error::CpusNodeMissing);
    };

    if let Some(map) = cpus.child_by_name("cpu-map") {
        return register_from_cpu_map(map, ctrl, registry);
    }
    warn!("no cpu-map in the device tree, falling back to legacy cluster detection");

    if let Some(clusters) = tree.find_by_path("/clusters") {
        return register_from_clusters_node(clusters, ctrl, registry);
    }
    warn!("no /clusters in the device tree, falling back to CPU topology");

    register_from_topology(topology, ctrl, registry)
}

/// Preferred strategy: dense `cluster<i>` children of `/cpus/cpu-map`.
///
/// Indices start at 0; the first missing child terminates enumeration, so
/// sparse numbering is silently truncated at the first gap.
fn register_from_cpu_map(
    map: &Node,
    ctrl: &Arc<dyn EnergyController>,
    registry: &mut ClockRegistry,
) -> Result<usize> {
    let mut registered = 0;
    for cluster in 0u32.. {
        if map.child_by_name(&format!("cluster{cluster}")).is_none() {
            break;
        }
        let name = cluster_clock_name(cluster);
        let _ = register_one(registry, &name, cluster, ctrl)?;
        registered += 1;
    }
    Ok(registered)
}

/// Legacy strategy: repeated `cluster` children of `/clusters`, in tree
/// order, each expected to carry a one-cell big-endian `reg` property.
///
/// A malformed `reg` is tolerated, never an error: the carried-forward id
/// can repeat an earlier one, so candidates whose name is already bound are
/// skipped rather than registered twice.
fn register_from_clusters_node(
    clusters: &Node,
    ctrl: &Arc<dyn EnergyController>,
    registry: &mut ClockRegistry,
) -> Result<usize> {
    let mut registered = 0;
    let mut cluster = 0u32;
    for node in clusters.children_by_name("cluster") {
        // An absent or wrong-length reg keeps the previous iteration's id
        // (0 on the first node). Long-standing quirk of the legacy layout.
        if let Some(reg) = node.property_u32("reg") {
            cluster = reg;
        }
        let name = cluster_clock_name(cluster);
        if registry.lookup(&name).is_some() {
            continue;
        }
        let _ = register_one(registry, &name, cluster, ctrl)?;
        registered += 1;
    }
    Ok(registered)
}

/// Last-resort strategy: derive cluster ids from the physical package id of
/// every possible CPU.
///
/// CPUs sharing a package produce the same clock name, and nothing
/// guarantees they appear in package order, so a clock is registered only
/// when no alias is bound under its name yet.
fn register_from_topology(
    topology: &CpuTopology,
    ctrl: &Arc<dyn EnergyController>,
    registry: &mut ClockRegistry,
) -> Result<usize> {
    let mut registered = 0;
    for cpu in topology.possible_cpus() {
        let cluster = topology.physical_package_id(cpu);
        let name = cluster_clock_name(cluster);
        if registry.lookup(&name).is_some() {
            continue;
        }
        let _ = register_one(registry, &name, cluster, ctrl)?;
        registered += 1;
    }
    Ok(registered)
}
