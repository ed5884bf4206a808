//! Validated parameters for random graph generation.

use crate::{
    error::{GraphError, Result},
    graph::Orientation,
};

/// Probability that a candidate link is kept, clamped to `[0, 1]`.
///
/// # Examples
/// ```
/// use graphe_core::EdgeProbability;
///
/// assert_eq!(EdgeProbability::new(1.7)?.get(), 1.0);
/// assert_eq!(EdgeProbability::new(-0.2)?.get(), 0.0);
/// assert!(EdgeProbability::new(f64::NAN).is_err());
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct EdgeProbability(f64);

impl EdgeProbability {
    /// Validates `raw`, clamping it into `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `raw` is NaN.
    pub fn new(raw: f64) -> Result<Self> {
        if raw.is_nan() {
            return Err(GraphError::InvalidProbability { got: raw });
        }
        Ok(Self(raw.clamp(0.0, 1.0)))
    }

    /// Returns the clamped probability.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Percentage threshold for the per-pair strategy. Undirected graphs
    /// visit every pair twice, so their threshold is halved.
    pub(super) fn percent_threshold(self, orientation: Orientation) -> f64 {
        let percent = self.0 * 100.0;
        if orientation.is_directed() {
            percent
        } else {
            percent / 2.0
        }
    }

    /// Number of candidates kept by the fixed-count strategy:
    /// `round(p * candidates)`, never more than `candidates`.
    pub(super) fn target_count(self, candidates: usize) -> usize {
        let wanted = (self.0 * candidates as f64).round() as usize;
        wanted.min(candidates)
    }
}

impl TryFrom<f64> for EdgeProbability {
    type Error = GraphError;

    fn try_from(raw: f64) -> Result<Self> {
        Self::new(raw)
    }
}

/// A vertex count validated from a signed source such as a file header or
/// user input.
///
/// # Examples
/// ```
/// use graphe_core::{GraphError, VertexCount};
///
/// assert_eq!(VertexCount::try_from(5_i64)?.get(), 5);
/// assert_eq!(
///     VertexCount::try_from(-1_i64),
///     Err(GraphError::InvalidVertexCount { got: -1 })
/// );
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexCount(usize);

impl VertexCount {
    /// Wraps an already non-negative count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for VertexCount {
    type Error = GraphError;

    fn try_from(raw: i64) -> Result<Self> {
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| GraphError::InvalidVertexCount { got: raw })
    }
}
