//! Property-based tests for graph mutation, derived builders and traversal.
//!
//! Fixtures are drawn from both random generators so every property runs
//! against directed and undirected graphs of varying density.

mod invariants;
mod strategies;
mod types;
