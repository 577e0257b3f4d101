//! Configuration system for the performance-clock platform model.
//!
//! This module defines all configuration structures used to parameterize the
//! simulated platform. It provides:
//! 1. **Defaults:** Baseline constants for cluster count, performance levels, and topology.
//! 2. **Structures:** Hierarchical config for the energy controller and the CPU topology.
//!
//! Configuration is supplied as JSON or via `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulated platform.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden.
mod defaults {
    /// Number of simulated CPU clusters.
    pub const CLUSTERS: u32 = 2;

    /// Performance level every cluster boots at, in oracle-native units (MHz).
    pub const BOOT_LEVEL: u32 = 1000;

    /// Lowest performance level the controller accepts (MHz).
    ///
    /// Requests below this value are clamped up by the controller; the clock
    /// adapter never clamps.
    pub const MIN_LEVEL: u32 = 200;

    /// Highest performance level the controller accepts (MHz).
    pub const MAX_LEVEL: u32 = 3000;

    /// Number of CPUs per cluster in the synthesized topology.
    pub const CPUS_PER_CLUSTER: u32 = 2;
}

/// Root configuration structure for the platform model.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use perfclk_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.energy_ctrl.clusters, 2);
/// assert_eq!(config.energy_ctrl.boot_level, 1000);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use perfclk_core::config::Config;
///
/// let json = r#"{
///     "energy_ctrl": {
///         "clusters": 4,
///         "boot_level": 800,
///         "min_level": 100,
///         "max_level": 2400
///     },
///     "topology": {
///         "cpus_per_cluster": 4
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.energy_ctrl.clusters, 4);
/// assert_eq!(config.topology.cpus_per_cluster, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Energy controller configuration (cluster count and level range).
    #[serde(default)]
    pub energy_ctrl: EnergyCtrlConfig,
    /// CPU topology configuration.
    #[serde(default)]
    pub topology: TopologyConfig,
}

/// Simulated energy controller configuration.
///
/// Defines how many clusters the controller manages and the performance-level
/// range it enforces. Levels are oracle-native units (MHz); the clock
/// framework sees them scaled by 1000.
#[derive(Debug, Clone, Deserialize)]
pub struct EnergyCtrlConfig {
    /// Number of clusters managed by the controller.
    #[serde(default = "EnergyCtrlConfig::default_clusters")]
    pub clusters: u32,

    /// Performance level every cluster starts at.
    #[serde(default = "EnergyCtrlConfig::default_boot_level")]
    pub boot_level: u32,

    /// Lowest level the controller accepts; lower requests are clamped up.
    #[serde(default = "EnergyCtrlConfig::default_min_level")]
    pub min_level: u32,

    /// Highest level the controller accepts; higher requests are clamped down.
    #[serde(default = "EnergyCtrlConfig::default_max_level")]
    pub max_level: u32,
}

impl EnergyCtrlConfig {
    /// Returns the default cluster count.
    fn default_clusters() -> u32 {
        defaults::CLUSTERS
    }

    /// Returns the default boot performance level.
    fn default_boot_level() -> u32 {
        defaults::BOOT_LEVEL
    }

    /// Returns the default minimum performance level.
    fn default_min_level() -> u32 {
        defaults::MIN_LEVEL
    }

    /// Returns the default maximum performance level.
    fn default_max_level() -> u32 {
        defaults::MAX_LEVEL
    }
}

impl Default for EnergyCtrlConfig {
    fn default() -> Self {
        Self {
            clusters: defaults::CLUSTERS,
            boot_level: defaults::BOOT_LEVEL,
            min_level: defaults::MIN_LEVEL,
            max_level: defaults::MAX_LEVEL,
        }
    }
}

/// CPU topology configuration.
///
/// Used both to synthesize the default hardware description tree and to build
/// the `CpuTopology` consulted by the last-resort discovery strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct TopologyConfig {
    /// Number of CPUs in each cluster.
    #[serde(default = "TopologyConfig::default_cpus_per_cluster")]
    pub cpus_per_cluster: u32,
}

impl TopologyConfig {
    /// Returns the default CPUs-per-cluster count.
    fn default_cpus_per_cluster() -> u32 {
        defaults::CPUS_PER_CLUSTER
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            cpus_per_cluster: defaults::CPUS_PER_CLUSTER,
        }
    }
}
