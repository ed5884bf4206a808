//! Shared test utilities used across graphe crates.

pub mod ci;
pub mod tracing;
