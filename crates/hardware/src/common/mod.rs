//! Common types shared across the performance-clock subsystem.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Error Handling:** The subsystem error enum and the `Result` alias.

/// Error definitions.
pub mod error;

pub use error::{Error, Result};
