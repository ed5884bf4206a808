//! Benchmark support crate for graphe.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for generation, traversal and derived builders.

pub mod error;
pub mod params;
pub mod source;
