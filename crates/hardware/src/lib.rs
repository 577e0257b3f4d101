//! Virtual performance-clock subsystem for a simulated multi-cluster CPU platform.
//!
//! This crate models the interface between a per-cluster energy controller and the
//! platform's clock framework. It provides:
//! 1. **Clock framework:** A dependency-injected registry of named clock devices with alias bindings.
//! 2. **Energy-ctrl clocks:** A clock adapter exposing each cluster's performance level as a rate.
//! 3. **Discovery:** Cluster enumeration from a hardware description tree with three fallback strategies.
//! 4. **Controller:** The `EnergyController` trait and a simulated, range-clamping implementation.
//! 5. **Platform:** One-shot bring-up wiring configuration, tree, topology, and registry together.

/// Clock framework, the energy-ctrl clock adapter, and cluster discovery.
pub mod clk;
/// Common types (errors and results).
pub mod common;
/// Platform configuration (defaults, hierarchical config structures).
pub mod config;
/// Hardware description tree (nodes, properties, lookup, iteration).
pub mod dt;
/// Energy controller trait and the simulated implementation.
pub mod ec;
/// Guest structure layout export for host introspection tooling.
pub mod introspect;
/// One-shot platform bring-up.
pub mod platform;
/// CPU topology (possible CPUs and their physical package ids).
pub mod topology;

/// Subsystem error type; every fallible operation returns [`Result`].
pub use crate::common::{Error, Result};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Assembled platform; construct with `Platform::bring_up`.
pub use crate::platform::Platform;
