//! Seed-to-avatar pipeline and its configuration.

/// Generator configuration (color bounds), loadable from JSON.
pub mod config;
/// Stream-driven selection, rendering and encoding.
pub mod generator;
