//! Depth-first search state and the iterative visit loop.

use crate::graph::Graph;

/// Progress marker for a vertex during a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Colour {
    /// Not yet discovered.
    White,
    /// Discovered; neighbours still being explored.
    Gray,
    /// Finished.
    Black,
}

/// Traversal context shared by every visit of one search.
///
/// Timestamps come from a single counter starting at zero; every discovery
/// and every finish consumes the next value, so a search over `n` reached
/// vertices hands out stamps `1..=2n`.
#[derive(Debug)]
pub(super) struct DepthFirstSearch<'g> {
    graph: &'g Graph,
    colour: Vec<Colour>,
    discovery: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
    predecessor: Vec<Option<usize>>,
    time: usize,
}

impl<'g> DepthFirstSearch<'g> {
    pub(super) fn new(graph: &'g Graph) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            graph,
            colour: vec![Colour::White; vertex_count],
            discovery: vec![None; vertex_count],
            finish: vec![None; vertex_count],
            predecessor: vec![None; vertex_count],
            time: 0,
        }
    }

    pub(super) fn colour(&self, vertex: usize) -> Option<Colour> {
        self.colour.get(vertex).copied()
    }

    /// Explores everything reachable from `root` that is still white.
    ///
    /// Frames hold `(vertex, cursor)` where `cursor` indexes the next
    /// neighbour to inspect, which reproduces the recursive stamp order
    /// without growing the call stack. `on_finish` sees each vertex as it
    /// turns black.
    pub(super) fn visit(&mut self, root: usize, mut on_finish: impl FnMut(usize)) {
        if self.colour(root) != Some(Colour::White) {
            return;
        }
        self.discover(root);
        let mut stack = vec![(root, 0_usize)];
        while let Some((vertex, cursor)) = stack.pop() {
            match self.graph.neighbour_at(vertex, cursor) {
                Some(next) => {
                    stack.push((vertex, cursor + 1));
                    if self.colour(next) == Some(Colour::White) {
                        if let Some(slot) = self.predecessor.get_mut(next) {
                            *slot = Some(vertex);
                        }
                        self.discover(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    self.complete(vertex);
                    on_finish(vertex);
                }
            }
        }
    }

    pub(super) fn into_tables(self) -> SearchTables {
        SearchTables {
            discovery: self.discovery,
            finish: self.finish,
            predecessor: self.predecessor,
        }
    }

    fn discover(&mut self, vertex: usize) {
        self.time += 1;
        if let Some(colour) = self.colour.get_mut(vertex) {
            *colour = Colour::Gray;
        }
        if let Some(stamp) = self.discovery.get_mut(vertex) {
            *stamp = Some(self.time);
        }
    }

    fn complete(&mut self, vertex: usize) {
        self.time += 1;
        if let Some(colour) = self.colour.get_mut(vertex) {
            *colour = Colour::Black;
        }
        if let Some(stamp) = self.finish.get_mut(vertex) {
            *stamp = Some(self.time);
        }
    }
}

/// Per-vertex results of a finished search.
#[derive(Debug)]
pub(super) struct SearchTables {
    pub(super) discovery: Vec<Option<usize>>,
    pub(super) finish: Vec<Option<usize>>,
    pub(super) predecessor: Vec<Option<usize>>,
}
