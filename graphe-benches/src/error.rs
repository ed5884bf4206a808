//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` instead of panicking inside
//! measured code.

use graphe_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction or analysis failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A synthetic graph came out without any links.
    #[error("synthetic graph with {vertex_count} vertices has no links")]
    EmptyGraph {
        /// Number of vertices requested.
        vertex_count: usize,
    },
}
