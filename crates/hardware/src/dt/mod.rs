//! Hardware Description Tree.
//!
//! This module models the boot-time structured description of devices and
//! topology consulted during cluster discovery. It provides:
//! 1. **Nodes:** Named nodes with byte-array properties and ordered children.
//! 2. **Lookup:** Path lookup, compatible-string lookup, and child-by-name access.
//! 3. **Iteration:** A lazy, finite, restartable walk over same-named children.

/// Tree node and property definitions.
pub mod node;

/// The tree itself and its query operations.
pub mod tree;

pub use node::{Node, Property};
pub use tree::DeviceTree;
