//! Edge-list parsing.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use graphe_core::{Graph, MutationOutcome, Orientation, VertexCount};
use tracing::{debug, instrument};

use crate::errors::EdgeListError;

struct Header {
    orientation: Orientation,
    vertex_count: usize,
    link_count: usize,
}

/// Reads a graph from an edge list. Blank lines are skipped and repeated
/// links are accepted once.
///
/// # Errors
/// Returns an [`EdgeListError`] describing the first malformed line, an
/// out-of-range vertex, a link count that disagrees with the header, or an
/// I/O failure.
///
/// # Examples
/// ```
/// use graphe_providers_edgelist::read_edge_list;
///
/// let graph = read_edge_list("1 3 2\n0 1\n2 1\n".as_bytes())?;
/// assert!(graph.is_directed());
/// assert!(graph.link_exists(2, 1));
/// assert_eq!(graph.link_count(), 2);
/// # Ok::<(), graphe_providers_edgelist::EdgeListError>(())
/// ```
pub fn read_edge_list(reader: impl BufRead) -> Result<Graph, EdgeListError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|content| (index + 1, content)));

    let header = loop {
        match lines.next().transpose()? {
            Some((_, content)) if content.trim().is_empty() => {}
            Some((line, content)) => break parse_header(line, &content)?,
            None => return Err(EdgeListError::MissingHeader),
        }
    };

    let mut graph = Graph::new(header.vertex_count, header.orientation)?;
    let mut found = 0_usize;
    for entry in lines {
        let (line, content) = entry?;
        if content.trim().is_empty() {
            continue;
        }
        let (source, target) = parse_link(line, &content, header.vertex_count)?;
        found += 1;
        if graph.add_link(source, target)? == MutationOutcome::DuplicateLink {
            debug!(line, source, target, "repeated link ignored");
        }
    }

    if found != header.link_count {
        return Err(EdgeListError::LinkCountMismatch {
            declared: header.link_count,
            found,
        });
    }
    Ok(graph)
}

/// Opens `path` and reads it with [`read_edge_list`].
///
/// # Errors
/// Returns [`EdgeListError::File`] when the file cannot be opened, plus
/// the errors of [`read_edge_list`].
#[instrument(
    name = "edgelist.load",
    err,
    skip(path),
    fields(path = %path.as_ref().display()),
)]
pub fn load_path(path: impl AsRef<Path>) -> Result<Graph, EdgeListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| EdgeListError::File {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file))
}

fn parse_header(line: usize, content: &str) -> Result<Header, EdgeListError> {
    let malformed = || EdgeListError::MalformedHeader {
        line,
        content: content.trim().to_owned(),
    };
    let fields: Vec<i64> = content
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| malformed())?;
    let [directed, vertex_count, link_count] = fields[..] else {
        return Err(malformed());
    };
    let orientation = match directed {
        0 => Orientation::Undirected,
        1 => Orientation::Directed,
        _ => return Err(malformed()),
    };
    let vertex_count = VertexCount::try_from(vertex_count)
        .map_err(|_| EdgeListError::NegativeCount {
            line,
            field: "vertex count",
            value: vertex_count,
        })?
        .get();
    let link_count = usize::try_from(link_count).map_err(|_| EdgeListError::NegativeCount {
        line,
        field: "link count",
        value: link_count,
    })?;
    Ok(Header {
        orientation,
        vertex_count,
        link_count,
    })
}

fn parse_link(
    line: usize,
    content: &str,
    vertex_count: usize,
) -> Result<(usize, usize), EdgeListError> {
    let malformed = || EdgeListError::MalformedLink {
        line,
        content: content.trim().to_owned(),
    };
    let ids: Vec<i64> = content
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| malformed())?;
    let [source, target] = ids[..] else {
        return Err(malformed());
    };
    let vertex = |raw: i64| {
        usize::try_from(raw)
            .ok()
            .filter(|&id| id < vertex_count)
            .ok_or(EdgeListError::VertexOutOfRange {
                line,
                vertex: raw,
                vertex_count,
            })
    };
    Ok((vertex(source)?, vertex(target)?))
}
