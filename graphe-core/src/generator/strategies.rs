//! The two G(n, p) sampling strategies.
//!
//! Both take the random source as a parameter so callers and tests can
//! reproduce a graph from a seed.

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, Orientation},
};

use super::params::EdgeProbability;

/// Runs an independent trial for every ordered pair `(i, j)`, `i != j`.
///
/// A sample is drawn uniformly from `[0, 100)` and the link is added when it
/// falls below `p * 100`. Undirected graphs halve the threshold because each
/// unordered pair is tried from both ends. The resulting link count is only
/// approximately `p` times the number of pairs.
///
/// # Errors
/// Returns [`GraphError::AllocationFailed`] when storage cannot be reserved.
///
/// # Examples
/// ```
/// use graphe_core::{EdgeProbability, Orientation, generate_per_pair};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let p = EdgeProbability::new(1.0)?;
/// let graph = generate_per_pair(4, p, Orientation::Directed, &mut rng)?;
/// assert_eq!(graph.link_count(), 12);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
pub fn generate_per_pair<R: Rng + ?Sized>(
    vertex_count: usize,
    probability: EdgeProbability,
    orientation: Orientation,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = Graph::new(vertex_count, orientation)?;
    let threshold = probability.percent_threshold(orientation);
    for source in 0..vertex_count {
        for target in (0..vertex_count).filter(|&target| target != source) {
            let sample: u32 = rng.gen_range(0..100);
            if f64::from(sample) < threshold {
                let _outcome = graph.add_link(source, target)?;
            }
        }
    }
    Ok(graph)
}

/// Shuffles every distinguishable pair and keeps the first
/// `round(p * M)` of them, where `M` is the number of pairs.
///
/// Pairs are ordered for directed graphs and `i < j` for undirected ones,
/// so the result has exactly `round(p * M)` links.
///
/// # Errors
/// Returns [`GraphError::AllocationFailed`] when the candidate list or the
/// graph cannot be allocated.
///
/// # Examples
/// ```
/// use graphe_core::{EdgeProbability, Orientation, generate_fixed_count};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let p = EdgeProbability::new(0.5)?;
/// let graph = generate_fixed_count(6, p, Orientation::Undirected, &mut rng)?;
/// assert_eq!(graph.link_count(), 8);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
pub fn generate_fixed_count<R: Rng + ?Sized>(
    vertex_count: usize,
    probability: EdgeProbability,
    orientation: Orientation,
    rng: &mut R,
) -> Result<Graph> {
    let mut graph = Graph::new(vertex_count, orientation)?;
    let mut candidates = candidate_pairs(vertex_count, orientation)?;
    let wanted = probability.target_count(candidates.len());
    let (chosen, _rest) = candidates.partial_shuffle(rng, wanted);
    for &(source, target) in chosen.iter() {
        let _outcome = graph.add_link(source, target)?;
    }
    Ok(graph)
}

/// Lists every pair the fixed-count strategy may pick, in index order.
pub(super) fn candidate_pairs(
    vertex_count: usize,
    orientation: Orientation,
) -> Result<Vec<(usize, usize)>> {
    let ordered = vertex_count
        .checked_mul(vertex_count.saturating_sub(1))
        .ok_or(GraphError::AllocationFailed {
            requested: usize::MAX,
        })?;
    let total = if orientation.is_directed() {
        ordered
    } else {
        ordered / 2
    };

    let mut pairs = Vec::new();
    pairs
        .try_reserve_exact(total)
        .map_err(|_| GraphError::AllocationFailed { requested: total })?;
    for source in 0..vertex_count {
        for target in 0..vertex_count {
            if source != target && (orientation.is_directed() || source < target) {
                pairs.push((source, target));
            }
        }
    }
    Ok(pairs)
}
