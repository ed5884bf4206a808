//! Random graph generation under the G(n, p) model.
//!
//! Two strategies are offered and kept separate because they answer
//! different needs:
//!
//! - [`GenerationStrategy::PerPair`] gives every ordered pair an independent
//!   Bernoulli trial, so the link count only approximates `p` times the pair
//!   count.
//! - [`GenerationStrategy::FixedCount`] shuffles all candidate pairs and keeps
//!   exactly `round(p * M)` of them.
//!
//! [`GeneratorBuilder`] validates the parameters once and yields a
//! [`RandomGraphGenerator`] that can be run repeatedly.

mod params;
mod strategies;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::{Graph, Orientation},
};

pub use self::{
    params::{EdgeProbability, VertexCount},
    strategies::{generate_fixed_count, generate_per_pair},
};

const DEFAULT_PROBABILITY: f64 = 0.5;

/// Selects how links are sampled.
///
/// # Examples
/// ```
/// use graphe_core::GenerationStrategy;
///
/// assert_eq!(GenerationStrategy::default(), GenerationStrategy::PerPair);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Independent trial per ordered pair; approximate density.
    #[default]
    PerPair,
    /// Shuffle-and-take; exact density.
    FixedCount,
}

/// Configures and constructs [`RandomGraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphe_core::{GenerationStrategy, GeneratorBuilder, Orientation};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(5)
///     .with_probability(1.0)
///     .with_orientation(Orientation::Directed)
///     .with_strategy(GenerationStrategy::FixedCount)
///     .with_seed(11)
///     .build()?;
/// assert_eq!(generator.generate()?.link_count(), 20);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    probability: f64,
    orientation: Orientation,
    strategy: GenerationStrategy,
    seed: Option<u64>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 0,
            probability: DEFAULT_PROBABILITY,
            orientation: Orientation::Undirected,
            strategy: GenerationStrategy::PerPair,
            seed: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{GenerationStrategy, GeneratorBuilder, Orientation};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 0);
    /// assert_eq!(builder.orientation(), Orientation::Undirected);
    /// assert_eq!(builder.strategy(), GenerationStrategy::PerPair);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the edge probability. Values outside `[0, 1]` are clamped
    /// by [`Self::build`].
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Returns the raw configured probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Chooses between directed and undirected output.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the configured orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Chooses the sampling strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: GenerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured sampling strategy.
    #[must_use]
    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    /// Fixes the random seed so generation is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`RandomGraphGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidProbability`] when the probability
    /// is NaN.
    pub fn build(self) -> Result<RandomGraphGenerator> {
        let probability = EdgeProbability::new(self.probability)?;
        Ok(RandomGraphGenerator {
            vertex_count: self.vertex_count,
            probability,
            orientation: self.orientation,
            strategy: self.strategy,
            seed: self.seed,
        })
    }
}

/// A validated G(n, p) configuration.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator {
    vertex_count: usize,
    probability: EdgeProbability,
    orientation: Orientation,
    strategy: GenerationStrategy,
    seed: Option<u64>,
}

impl RandomGraphGenerator {
    /// Returns the number of vertices generated graphs will have.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the clamped edge probability.
    #[must_use]
    pub fn probability(&self) -> EdgeProbability {
        self.probability
    }

    /// Returns the orientation of generated graphs.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the sampling strategy.
    #[must_use]
    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    /// Generates a graph, seeding a [`SmallRng`] from the configured seed or
    /// from operating-system entropy.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::AllocationFailed`] when storage cannot be
    /// reserved.
    pub fn generate(&self) -> Result<Graph> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a graph using the supplied random source.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::AllocationFailed`] when storage cannot be
    /// reserved.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(
            vertex_count = self.vertex_count,
            probability = self.probability.get(),
            orientation = %self.orientation,
            strategy = ?self.strategy,
        ),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let graph = match self.strategy {
            GenerationStrategy::PerPair => {
                generate_per_pair(self.vertex_count, self.probability, self.orientation, rng)?
            }
            GenerationStrategy::FixedCount => {
                generate_fixed_count(self.vertex_count, self.probability, self.orientation, rng)?
            }
        };
        info!(links = graph.link_count(), "graph generated");
        Ok(graph)
    }
}
