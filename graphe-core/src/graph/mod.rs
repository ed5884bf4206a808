//! Adjacency-list graph and its link mutation primitives.
//!
//! Vertices are dense `usize` identifiers in `[0, n)`, so no vertex table
//! exists: the id doubles as the index into the adjacency table. Each list
//! reports its neighbours most-recent-first. Storage appends and iteration
//! walks back to front, which keeps insertion O(1).
//!
//! `link_count` counts logical links. An undirected edge `{a, b}` is stored
//! in both lists but counted once; a self-loop is stored and counted once.

mod degrees;
mod outcome;

use std::fmt;

use tracing::debug;

use crate::error::{GraphError, Result};

pub use self::{degrees::Degrees, outcome::MutationOutcome};

/// Whether links carry a direction. Fixed when a [`Graph`] is created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// Links are arcs `a -> b`.
    Directed,
    /// Links are symmetric edges `{a, b}`.
    Undirected,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl From<bool> for Orientation {
    fn from(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        })
    }
}

/// A directed or undirected graph stored as one adjacency list per vertex.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, MutationOutcome, Orientation};
///
/// let mut graph = Graph::new(3, Orientation::Undirected)?;
/// assert_eq!(graph.add_link(0, 1)?, MutationOutcome::Applied);
/// assert_eq!(graph.add_link(1, 0)?, MutationOutcome::DuplicateLink);
/// assert!(graph.link_exists(1, 0));
/// assert_eq!(graph.link_count(), 1);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    orientation: Orientation,
    adjacency: Vec<Vec<usize>>,
    link_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no links.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] when the adjacency table
    /// cannot be reserved.
    pub fn new(vertex_count: usize, orientation: Orientation) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::AllocationFailed {
                requested: vertex_count,
            })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            orientation,
            adjacency,
            link_count: 0,
        })
    }

    /// Creates a graph and inserts `links` in order through [`Self::add_link`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if any link names a vertex
    /// outside the graph.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{Graph, Orientation};
    ///
    /// let graph = Graph::from_links(3, Orientation::Directed, &[(0, 1), (1, 2)])?;
    /// assert_eq!(graph.link_count(), 2);
    /// # Ok::<(), graphe_core::GraphError>(())
    /// ```
    pub fn from_links(
        vertex_count: usize,
        orientation: Orientation,
        links: &[(usize, usize)],
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count, orientation)?;
        for &(source, target) in links {
            let _outcome = graph.add_link(source, target)?;
        }
        Ok(graph)
    }

    /// Creates an empty graph with the same vertex count and orientation.
    pub(crate) fn empty_like(&self) -> Result<Self> {
        Self::new(self.vertex_count(), self.orientation)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Returns the orientation fixed at construction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` when links are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when `vertex` names a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns `true` when `target` appears in the adjacency list of
    /// `source`. Runs in `O(degree(source))`; unknown vertices yield `false`.
    #[must_use]
    pub fn link_exists(&self, source: usize, target: usize) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|targets| targets.contains(&target))
    }

    /// Returns `true` when `target` is one hop away from `source`.
    ///
    /// Equivalent to [`Self::link_exists`]; for undirected graphs the answer
    /// is symmetric.
    #[must_use]
    pub fn is_adjacent(&self, source: usize, target: usize) -> bool {
        self.link_exists(source, target)
    }

    /// Iterates over the neighbours of `vertex`, most recently linked first.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().rev().copied())
    }

    /// Returns the `cursor`-th neighbour of `vertex` in [`Self::neighbours`]
    /// order.
    pub(crate) fn neighbour_at(&self, vertex: usize, cursor: usize) -> Option<usize> {
        let targets = self.adjacency.get(vertex)?;
        let index = targets.len().checked_sub(cursor.checked_add(1)?)?;
        targets.get(index).copied()
    }

    /// Returns the out-degree of `vertex`, or `None` for unknown vertices.
    #[must_use]
    pub fn out_degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Inserts a link, dispatching on the graph's orientation.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is
    /// outside the graph, and [`GraphError::AllocationFailed`] when the
    /// adjacency list cannot grow. The graph is unchanged on error.
    pub fn add_link(&mut self, source: usize, target: usize) -> Result<MutationOutcome> {
        match self.orientation {
            Orientation::Directed => self.add_directed_link(source, target),
            Orientation::Undirected => self.add_undirected_link(source, target),
        }
    }

    /// Inserts the arc `source -> target` unless it already exists.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOperation`] on undirected graphs,
    /// where a lone arc would break symmetry, plus the errors of
    /// [`Self::add_link`].
    pub fn add_directed_link(&mut self, source: usize, target: usize) -> Result<MutationOutcome> {
        if !self.is_directed() {
            return Err(GraphError::UnsupportedOperation {
                operation: "add_directed_link",
                reason: "undirected graphs store links in both directions",
            });
        }
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if self.link_exists(source, target) {
            debug!(source, target, "arc already present");
            return Ok(MutationOutcome::DuplicateLink);
        }
        self.reserve_slot(source)?;
        self.push_target(source, target);
        self.link_count += 1;
        Ok(MutationOutcome::Applied)
    }

    /// Inserts the edge `{source, target}` unless it already exists.
    ///
    /// Both lists gain an entry when `source != target`; a self-loop is
    /// stored once. Either way the link count grows by one.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOperation`] on directed graphs plus
    /// the errors of [`Self::add_link`].
    pub fn add_undirected_link(
        &mut self,
        source: usize,
        target: usize,
    ) -> Result<MutationOutcome> {
        if self.is_directed() {
            return Err(GraphError::UnsupportedOperation {
                operation: "add_undirected_link",
                reason: "directed graphs store one arc per link",
            });
        }
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if self.link_exists(source, target) {
            debug!(source, target, "edge already present");
            return Ok(MutationOutcome::DuplicateLink);
        }
        self.reserve_slot(source)?;
        self.reserve_slot(target)?;
        self.push_target(source, target);
        if source != target {
            self.push_target(target, source);
        }
        self.link_count += 1;
        Ok(MutationOutcome::Applied)
    }

    /// Removes the link `source -> target` (and its mirror for undirected
    /// graphs). Remaining neighbours keep their order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is
    /// outside the graph.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{Graph, MutationOutcome, Orientation};
    ///
    /// let mut graph = Graph::from_links(2, Orientation::Undirected, &[(0, 1)])?;
    /// assert_eq!(graph.remove_link(1, 0)?, MutationOutcome::Applied);
    /// assert_eq!(graph.remove_link(0, 1)?, MutationOutcome::MissingLink);
    /// assert_eq!(graph.link_count(), 0);
    /// # Ok::<(), graphe_core::GraphError>(())
    /// ```
    pub fn remove_link(&mut self, source: usize, target: usize) -> Result<MutationOutcome> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if !self.remove_target(source, target) {
            debug!(source, target, "link not found");
            return Ok(MutationOutcome::MissingLink);
        }
        if !self.is_directed() && source != target {
            self.remove_target(target, source);
        }
        self.link_count -= 1;
        Ok(MutationOutcome::Applied)
    }

    /// Appends a vertex. Only the next free id (`vertex_count()`) is
    /// accepted; any other id reports [`MutationOutcome::VertexExists`].
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] when the adjacency table
    /// cannot grow.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{Graph, MutationOutcome, Orientation};
    ///
    /// let mut graph = Graph::new(2, Orientation::Directed)?;
    /// assert_eq!(graph.add_vertex(2)?, MutationOutcome::Applied);
    /// assert_eq!(graph.add_vertex(7)?, MutationOutcome::VertexExists);
    /// assert_eq!(graph.vertex_count(), 3);
    /// # Ok::<(), graphe_core::GraphError>(())
    /// ```
    pub fn add_vertex(&mut self, vertex: usize) -> Result<MutationOutcome> {
        if vertex != self.vertex_count() {
            debug!(vertex, vertex_count = self.vertex_count(), "vertex rejected");
            return Ok(MutationOutcome::VertexExists);
        }
        self.adjacency
            .try_reserve(1)
            .map_err(|_| GraphError::AllocationFailed {
                requested: vertex.saturating_add(1),
            })?;
        self.adjacency.push(Vec::new());
        Ok(MutationOutcome::Applied)
    }

    /// Computes in- and out-degrees for every vertex.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{Graph, Orientation};
    ///
    /// let graph = Graph::from_links(3, Orientation::Directed, &[(0, 2), (1, 2)])?;
    /// let degrees = graph.degrees();
    /// assert_eq!(degrees.in_degree(), &[0, 0, 2]);
    /// assert_eq!(degrees.out_degree(), &[1, 1, 0]);
    /// # Ok::<(), graphe_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn degrees(&self) -> Degrees {
        let out_degree: Vec<usize> = self.adjacency.iter().map(Vec::len).collect();
        let in_degree = if self.is_directed() {
            let mut in_degree = vec![0; self.vertex_count()];
            for target in self.adjacency.iter().flatten() {
                if let Some(count) = in_degree.get_mut(*target) {
                    *count += 1;
                }
            }
            in_degree
        } else {
            out_degree.clone()
        };
        Degrees::new(in_degree, out_degree)
    }

    /// Enumerates every logical link once, in adjacency order.
    ///
    /// Undirected edges are yielded as `(low, high)` from the lower
    /// endpoint's list, so self-loops appear exactly once.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{Graph, Orientation};
    ///
    /// let graph = Graph::from_links(3, Orientation::Undirected, &[(2, 0), (1, 1)])?;
    /// let links: Vec<_> = graph.links().collect();
    /// assert_eq!(links, vec![(0, 2), (1, 1)]);
    /// # Ok::<(), graphe_core::GraphError>(())
    /// ```
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let directed = self.is_directed();
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(source, targets)| {
                targets
                    .iter()
                    .rev()
                    .copied()
                    .filter(move |&target| directed || source <= target)
                    .map(move |target| (source, target))
            })
    }

    /// Validates that `vertex` belongs to the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] otherwise.
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn reserve_slot(&mut self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        let Some(targets) = self.adjacency.get_mut(vertex) else {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        };
        targets
            .try_reserve(1)
            .map_err(|_| GraphError::AllocationFailed {
                requested: targets.len().saturating_add(1),
            })
    }

    fn push_target(&mut self, source: usize, target: usize) {
        if let Some(targets) = self.adjacency.get_mut(source) {
            targets.push(target);
        }
    }

    fn remove_target(&mut self, source: usize, target: usize) -> bool {
        let Some(targets) = self.adjacency.get_mut(source) else {
            return false;
        };
        match targets.iter().position(|&candidate| candidate == target) {
            Some(index) => {
                targets.remove(index);
                true
            }
            None => false,
        }
    }
}
