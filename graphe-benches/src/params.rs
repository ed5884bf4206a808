//! Benchmark parameter types.
//!
//! Display implementations double as Criterion benchmark ids.

use std::fmt;

/// Parameters for a random-generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerationBenchParams {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Link probability.
    pub probability: f64,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.probability)
    }
}

/// Parameters for a benchmark over an existing graph.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of logical links in the graph.
    pub link_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.link_count)
    }
}
