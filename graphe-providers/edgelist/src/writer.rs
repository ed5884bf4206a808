//! Edge-list serialisation.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use graphe_core::Graph;
use tracing::instrument;

use crate::errors::EdgeListError;

/// Writes `graph` as an edge list. The header carries the logical link
/// count and each link is written once, in adjacency order.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the writer fails.
///
/// # Examples
/// ```
/// use graphe_core::{Graph, Orientation};
/// use graphe_providers_edgelist::write_edge_list;
///
/// let graph = Graph::from_links(3, Orientation::Undirected, &[(2, 0), (1, 1)])?;
/// let mut out = Vec::new();
/// write_edge_list(&graph, &mut out)?;
/// assert_eq!(String::from_utf8_lossy(&out), "0 3 2\n0 2\n1 1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_edge_list(graph: &Graph, mut writer: impl Write) -> Result<(), EdgeListError> {
    writeln!(
        writer,
        "{} {} {}",
        u8::from(graph.is_directed()),
        graph.vertex_count(),
        graph.link_count()
    )?;
    for (source, target) in graph.links() {
        writeln!(writer, "{source} {target}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes `graph` to it.
///
/// # Errors
/// Returns [`EdgeListError::File`] when the file cannot be created, plus
/// the errors of [`write_edge_list`].
#[instrument(
    name = "edgelist.save",
    err,
    skip(graph, path),
    fields(path = %path.as_ref().display(), links = graph.link_count()),
)]
pub fn save_path(graph: &Graph, path: impl AsRef<Path>) -> Result<(), EdgeListError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| EdgeListError::File {
        path: path.to_path_buf(),
        source,
    })?;
    write_edge_list(graph, BufWriter::new(file))
}
