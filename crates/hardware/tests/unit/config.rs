//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, and defaults.

use perfclk_core::config::{Config, EnergyCtrlConfig, TopologyConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.energy_ctrl.clusters, 2);
    assert_eq!(config.energy_ctrl.boot_level, 1000);
    assert_eq!(config.energy_ctrl.min_level, 200);
    assert_eq!(config.energy_ctrl.max_level, 3000);
    assert_eq!(config.topology.cpus_per_cluster, 2);
}

#[test]
fn test_energy_ctrl_config_defaults() {
    let energy_ctrl = EnergyCtrlConfig::default();
    assert_eq!(energy_ctrl.clusters, 2);
    assert_eq!(energy_ctrl.boot_level, 1000);
}

#[test]
fn test_topology_config_defaults() {
    let topology = TopologyConfig::default();
    assert_eq!(topology.cpus_per_cluster, 2);
}

#[test]
fn test_json_deserialization_full() {
    let json = r#"{
        "energy_ctrl": {
            "clusters": 4,
            "boot_level": 800,
            "min_level": 100,
            "max_level": 2400
        },
        "topology": {
            "cpus_per_cluster": 4
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.energy_ctrl.clusters, 4);
    assert_eq!(config.energy_ctrl.boot_level, 800);
    assert_eq!(config.energy_ctrl.min_level, 100);
    assert_eq!(config.energy_ctrl.max_level, 2400);
    assert_eq!(config.topology.cpus_per_cluster, 4);
}

#[test]
fn test_json_deserialization_partial_fills_defaults() {
    let json = r#"{
        "energy_ctrl": {
            "clusters": 8
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.energy_ctrl.clusters, 8);
    assert_eq!(config.energy_ctrl.boot_level, 1000, "Unset fields default");
    assert_eq!(config.topology.cpus_per_cluster, 2);
}

#[test]
fn test_json_deserialization_empty_object_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.energy_ctrl.clusters, Config::default().energy_ctrl.clusters);
}
