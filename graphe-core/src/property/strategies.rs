//! Strategy builders for graph property tests.

use proptest::prelude::*;

use crate::graph::Orientation;

use super::types::{GraphFixture, Sampler};

/// Upper bound on generated vertex counts. Complement and line-graph
/// checks are quadratic or worse, so fixtures stay small.
const MAX_VERTICES: usize = 24;

/// Generates fixtures of either orientation from either sampler.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (
        0..=MAX_VERTICES,
        0.0_f64..=1.0,
        any::<bool>(),
        any::<Sampler>(),
        any::<u64>(),
    )
        .prop_map(|(vertex_count, probability, directed, sampler, seed)| {
            GraphFixture::generate(
                vertex_count,
                probability,
                Orientation::from(directed),
                sampler,
                seed,
            )
        })
}

/// Generates undirected fixtures only.
pub(super) fn undirected_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (0..=MAX_VERTICES, 0.0_f64..=0.3, any::<Sampler>(), any::<u64>()).prop_map(
        |(vertex_count, probability, sampler, seed)| {
            GraphFixture::generate(
                vertex_count,
                probability,
                Orientation::Undirected,
                sampler,
                seed,
            )
        },
    )
}
