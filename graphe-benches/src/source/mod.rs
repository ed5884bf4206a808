//! Seeded synthetic graphs for benchmarks.

use graphe_core::{GenerationStrategy, GeneratorBuilder, Graph, Orientation};

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

/// Configuration for a synthetic benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Link probability.
    pub probability: f64,
    /// Whether links are arcs or edges.
    pub orientation: Orientation,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated benchmark graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
}

impl SyntheticGraph {
    /// Generates a fixed-count graph from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Graph`] when generation fails and
    /// [`BenchSetupError::EmptyGraph`] when the result has no links, since
    /// such a graph measures nothing useful.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, BenchSetupError> {
        let graph = GeneratorBuilder::new()
            .with_vertex_count(config.vertex_count)
            .with_probability(config.probability)
            .with_orientation(config.orientation)
            .with_strategy(GenerationStrategy::FixedCount)
            .with_seed(config.seed)
            .build()?
            .generate()?;
        if graph.link_count() == 0 {
            return Err(BenchSetupError::EmptyGraph {
                vertex_count: config.vertex_count,
            });
        }
        Ok(Self { graph })
    }

    /// The generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Benchmark id parameters describing the graph.
    #[must_use]
    pub fn params(&self) -> GraphBenchParams {
        GraphBenchParams {
            vertex_count: self.graph.vertex_count(),
            link_count: self.graph.link_count(),
        }
    }
}
