//! Graphs derived from an existing graph.
//!
//! Every builder borrows its source read-only and returns a graph with
//! independent storage. Empty sources yield empty results.

use tracing::{info, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// Builds the subgraph induced by `subset`.
///
/// The result has `subset.len()` vertices and keeps the original ids of
/// `graph`, so every id in `subset` must be below both `subset.len()` and
/// `graph.vertex_count()`. Members are visited in `subset` order, each
/// followed by its neighbours in reporting order.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] when `subset` holds an id that
/// cannot be stored under that rule.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, induced_subgraph};
///
/// let graph = Graph::from_links(4, Orientation::Directed, &[(0, 1), (1, 2), (2, 3)])?;
/// let sub = induced_subgraph(&graph, &[0, 1, 2])?;
/// assert_eq!(sub.vertex_count(), 3);
/// assert!(sub.link_exists(0, 1) && sub.link_exists(1, 2));
/// assert_eq!(sub.link_count(), 2);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[instrument(
    name = "core.induced_subgraph",
    err,
    skip(graph, subset),
    fields(vertex_count = graph.vertex_count(), subset_len = subset.len()),
)]
pub fn induced_subgraph(graph: &Graph, subset: &[usize]) -> Result<Graph> {
    let limit = subset.len().min(graph.vertex_count());
    if let Some(&vertex) = subset.iter().find(|&&vertex| vertex >= limit) {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count: limit,
        });
    }

    let mut members = vec![false; limit];
    for &vertex in subset {
        if let Some(slot) = members.get_mut(vertex) {
            *slot = true;
        }
    }

    // Subset order drives insertion, so it also fixes neighbour order.
    let mut sub = Graph::new(subset.len(), graph.orientation())?;
    for &source in subset {
        for target in graph.neighbours(source) {
            if members.get(target).copied().unwrap_or(false) {
                let _outcome = sub.add_link(source, target)?;
            }
        }
    }
    info!(links = sub.link_count(), "subgraph built");
    Ok(sub)
}

/// Builds the complement: every pair `i != j` that is not linked in
/// `graph` becomes a link. Self-loops are never produced.
///
/// # Errors
/// Returns [`GraphError::AllocationFailed`] when storage cannot be
/// reserved.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, complement};
///
/// let graph = Graph::from_links(3, Orientation::Undirected, &[(0, 1)])?;
/// let inverse = complement(&graph)?;
/// assert!(!inverse.link_exists(0, 1));
/// assert!(inverse.link_exists(0, 2) && inverse.link_exists(1, 2));
/// assert_eq!(inverse.link_count(), 2);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[instrument(
    name = "core.complement",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count(), orientation = %graph.orientation()),
)]
pub fn complement(graph: &Graph) -> Result<Graph> {
    let mut inverse = graph.empty_like()?;
    let vertex_count = graph.vertex_count();
    for source in 0..vertex_count {
        // Undirected pairs are symmetric; one half suffices.
        let first = if graph.is_directed() { 0 } else { source + 1 };
        for target in first..vertex_count {
            if source != target && !graph.link_exists(source, target) {
                let _outcome = inverse.add_link(source, target)?;
            }
        }
    }
    info!(links = inverse.link_count(), "complement built");
    Ok(inverse)
}

/// Builds the transpose. Directed links are reversed; an undirected graph
/// is copied unchanged.
///
/// # Errors
/// Returns [`GraphError::AllocationFailed`] when storage cannot be
/// reserved.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, transpose};
///
/// let graph = Graph::from_links(2, Orientation::Directed, &[(0, 1)])?;
/// let reversed = transpose(&graph)?;
/// assert!(reversed.link_exists(1, 0));
/// assert!(!reversed.link_exists(0, 1));
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[instrument(
    name = "core.transpose",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count(), orientation = %graph.orientation()),
)]
pub fn transpose(graph: &Graph) -> Result<Graph> {
    if !graph.is_directed() {
        return Ok(graph.clone());
    }
    let mut reversed = graph.empty_like()?;
    for (source, target) in graph.links() {
        let _outcome = reversed.add_link(target, source)?;
    }
    Ok(reversed)
}

/// Builds the vertex-level line graph of an undirected graph: `(i, k)` is
/// linked whenever some `j` is adjacent to both and `k != i`.
///
/// # Errors
/// Returns [`GraphError::UnsupportedOperation`] for directed graphs.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, line_graph};
///
/// let path = Graph::from_links(3, Orientation::Undirected, &[(0, 1), (1, 2)])?;
/// let line = line_graph(&path)?;
/// assert!(line.link_exists(0, 2));
/// assert_eq!(line.link_count(), 1);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[instrument(
    name = "core.line_graph",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn line_graph(graph: &Graph) -> Result<Graph> {
    if graph.is_directed() {
        return Err(GraphError::UnsupportedOperation {
            operation: "line_graph",
            reason: "only undirected graphs have a line graph",
        });
    }
    let mut line = graph.empty_like()?;
    for vertex in 0..graph.vertex_count() {
        for middle in graph.neighbours(vertex) {
            for far in graph.neighbours(middle).filter(|&far| far != vertex) {
                let _outcome = line.add_link(vertex, far)?;
            }
        }
    }
    info!(links = line.link_count(), "line graph built");
    Ok(line)
}
