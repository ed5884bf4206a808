//! Per-vertex degree tables.

/// In- and out-degree of every vertex, indexed by vertex id.
///
/// For undirected graphs both tables are identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Degrees {
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
}

impl Degrees {
    pub(super) fn new(in_degree: Vec<usize>, out_degree: Vec<usize>) -> Self {
        Self {
            in_degree,
            out_degree,
        }
    }

    /// Number of links ending at each vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn in_degree(&self) -> &[usize] { &self.in_degree }

    /// Number of links leaving each vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn out_degree(&self) -> &[usize] { &self.out_degree }

    /// Iterates over `(vertex, in_degree, out_degree)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.in_degree
            .iter()
            .zip(&self.out_degree)
            .enumerate()
            .map(|(vertex, (&incoming, &outgoing))| (vertex, incoming, outgoing))
    }
}
