//! Shared test infrastructure for the performance-clock suite.

/// Energy controller test doubles.
pub mod mocks;
