use std::{io, path::PathBuf};

use graphe_core::GraphError;
use thiserror::Error;

/// Failures while reading or writing an edge list. Line numbers are
/// 1-based.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to access `{}`", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("edge list is empty; expected a `directed vertex_count link_count` header")]
    MissingHeader,
    #[error("line {line}: malformed header `{content}`")]
    MalformedHeader { line: usize, content: String },
    #[error("line {line}: {field} must be non-negative (got {value})")]
    NegativeCount {
        line: usize,
        field: &'static str,
        value: i64,
    },
    #[error("line {line}: expected `source target` but found `{content}`")]
    MalformedLink { line: usize, content: String },
    #[error("line {line}: vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: i64,
        vertex_count: usize,
    },
    #[error("header declares {declared} links but {found} were listed")]
    LinkCountMismatch { declared: usize, found: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl EdgeListError {
    /// Stable machine-readable code for logs and exit reporting.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "EDGELIST_IO",
            Self::File { .. } => "EDGELIST_FILE",
            Self::MissingHeader => "EDGELIST_MISSING_HEADER",
            Self::MalformedHeader { .. } => "EDGELIST_MALFORMED_HEADER",
            Self::NegativeCount { .. } => "EDGELIST_NEGATIVE_COUNT",
            Self::MalformedLink { .. } => "EDGELIST_MALFORMED_LINK",
            Self::VertexOutOfRange { .. } => "EDGELIST_VERTEX_OUT_OF_RANGE",
            Self::LinkCountMismatch { .. } => "EDGELIST_LINK_COUNT_MISMATCH",
            Self::Graph(err) => err.code().as_str(),
        }
    }
}
