//! Fixture types shared by the property suites.

use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{
    generator::{EdgeProbability, GenerationStrategy, generate_fixed_count, generate_per_pair},
    graph::{Graph, Orientation},
};

/// Which generator produced a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Sampler {
    /// Independent trial per ordered pair.
    PerPair,
    /// Exact link count.
    FixedCount,
}

impl From<Sampler> for GenerationStrategy {
    fn from(sampler: Sampler) -> Self {
        match sampler {
            Sampler::PerPair => Self::PerPair,
            Sampler::FixedCount => Self::FixedCount,
        }
    }
}

/// A generated graph together with the parameters that produced it, kept
/// for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub graph: Graph,
    pub sampler: Sampler,
    pub probability: f64,
    pub seed: u64,
}

impl GraphFixture {
    pub(super) fn generate(
        vertex_count: usize,
        probability: f64,
        orientation: Orientation,
        sampler: Sampler,
        seed: u64,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let clamped = EdgeProbability::new(probability).expect("fixture probability is finite");
        let graph = match GenerationStrategy::from(sampler) {
            GenerationStrategy::PerPair => {
                generate_per_pair(vertex_count, clamped, orientation, &mut rng)
            }
            GenerationStrategy::FixedCount => {
                generate_fixed_count(vertex_count, clamped, orientation, &mut rng)
            }
        }
        .expect("fixture graphs are small enough to allocate");
        Self {
            graph,
            sampler,
            probability,
            seed,
        }
    }
}
