//! Depth-first traversal, predecessor forests and component labelling.
//!
//! Neighbours are explored in [`Graph::neighbours`] order, so the stamps
//! depend on insertion order. Vertices a search never reaches report `None`
//! for discovery, finish and predecessor.

mod search;

use tracing::{info, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

use self::search::{DepthFirstSearch, SearchTables};

/// Timestamps and predecessors produced by a depth-first search.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, traverse};
///
/// let graph = Graph::from_links(3, Orientation::Directed, &[(0, 1)])?;
/// let forest = traverse(&graph, 0)?;
/// assert_eq!(forest.discovery(1), Some(2));
/// assert_eq!(forest.finish(0), Some(4));
/// assert_eq!(forest.predecessor(1), Some(0));
/// assert!(!forest.is_reached(2));
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DfsForest {
    roots: Vec<usize>,
    discovery: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
    predecessor: Vec<Option<usize>>,
}

impl DfsForest {
    fn from_tables(roots: Vec<usize>, tables: SearchTables) -> Self {
        Self {
            roots,
            discovery: tables.discovery,
            finish: tables.finish,
            predecessor: tables.predecessor,
        }
    }

    /// Vertices each visit started from, in visiting order.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Number of vertices covered by the tables.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.discovery.len()
    }

    /// Discovery stamp of `vertex`.
    #[must_use]
    pub fn discovery(&self, vertex: usize) -> Option<usize> {
        self.discovery.get(vertex).copied().flatten()
    }

    /// Finish stamp of `vertex`.
    #[must_use]
    pub fn finish(&self, vertex: usize) -> Option<usize> {
        self.finish.get(vertex).copied().flatten()
    }

    /// Parent of `vertex` in the forest. Roots and unreached vertices have
    /// none.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessor.get(vertex).copied().flatten()
    }

    /// Returns `true` when the search discovered `vertex`.
    #[must_use]
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.discovery(vertex).is_some()
    }

    /// All discovery stamps indexed by vertex.
    #[must_use]
    pub fn discoveries(&self) -> &[Option<usize>] {
        &self.discovery
    }

    /// All finish stamps indexed by vertex.
    #[must_use]
    pub fn finishes(&self) -> &[Option<usize>] {
        &self.finish
    }

    /// All predecessors indexed by vertex, suitable for
    /// [`predecessor_graph`].
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    /// Iterates over reached vertices in id order.
    pub fn reached(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(|&vertex| self.is_reached(vertex))
    }
}

/// Component labels assigned by [`components`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
    forest: DfsForest,
}

impl Components {
    /// Label of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn label(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Labels indexed by vertex.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of labels handed out; equals the number of roots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when both vertices carry the same label.
    #[must_use]
    pub fn same_component(&self, first: usize, second: usize) -> bool {
        matches!(
            (self.label(first), self.label(second)),
            (Some(a), Some(b)) if a == b
        )
    }

    /// The search forest spanning every vertex.
    #[must_use]
    pub fn forest(&self) -> &DfsForest {
        &self.forest
    }
}

/// Runs one depth-first visit from `source`.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] when `source` is not a vertex
/// of `graph`.
#[instrument(
    name = "core.traverse",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn traverse(graph: &Graph, source: usize) -> Result<DfsForest> {
    graph.check_vertex(source)?;
    let mut search = DepthFirstSearch::new(graph);
    let mut reached = 0_usize;
    search.visit(source, |_| reached += 1);
    info!(reached, "traversal finished");
    Ok(DfsForest::from_tables(vec![source], search.into_tables()))
}

/// Builds the predecessor graph: a link `(p, v)` for every vertex `v`
/// whose entry is `Some(p)`. The result shares `graph`'s vertex count and
/// orientation.
///
/// # Errors
/// Returns [`GraphError::PredecessorLengthMismatch`] when `predecessors`
/// does not have one entry per vertex, and
/// [`GraphError::VertexOutOfRange`] when a parent is not a vertex.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, predecessor_graph, traverse};
///
/// let graph = Graph::from_links(3, Orientation::Undirected, &[(0, 1), (0, 2), (1, 2)])?;
/// let forest = traverse(&graph, 0)?;
/// let tree = predecessor_graph(&graph, forest.predecessors())?;
/// assert_eq!(tree.link_count(), 2);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
pub fn predecessor_graph(graph: &Graph, predecessors: &[Option<usize>]) -> Result<Graph> {
    if predecessors.len() != graph.vertex_count() {
        return Err(GraphError::PredecessorLengthMismatch {
            expected: graph.vertex_count(),
            actual: predecessors.len(),
        });
    }
    let mut tree = graph.empty_like()?;
    for (vertex, parent) in predecessors.iter().enumerate() {
        if let Some(parent) = *parent {
            let _outcome = tree.add_link(parent, vertex)?;
        }
    }
    Ok(tree)
}

/// Labels every vertex by the depth-first visit that reached it.
///
/// Visits start from each still-white vertex in id order and each visit
/// takes the next label. For undirected graphs labels are the connected
/// components; for directed graphs they group vertices by the first root
/// that reached them, which is not strong connectivity.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation, components};
///
/// let graph = Graph::from_links(4, Orientation::Undirected, &[(0, 2), (1, 3)])?;
/// let labels = components(&graph);
/// assert_eq!(labels.labels(), &[0, 1, 0, 1]);
/// assert_eq!(labels.count(), 2);
/// # Ok::<(), graphe_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "core.components", skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn components(graph: &Graph) -> Components {
    let vertex_count = graph.vertex_count();
    let mut search = DepthFirstSearch::new(graph);
    let mut labels = vec![0; vertex_count];
    let mut roots = Vec::new();
    for root in 0..vertex_count {
        if search.colour(root) != Some(search::Colour::White) {
            continue;
        }
        let label = roots.len();
        search.visit(root, |vertex| {
            if let Some(slot) = labels.get_mut(vertex) {
                *slot = label;
            }
        });
        roots.push(root);
    }
    let count = roots.len();
    info!(count, "components labelled");
    Components {
        labels,
        count,
        forest: DfsForest::from_tables(roots, search.into_tables()),
    }
}
