//! Error types for the graphe core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias. Benign no-ops such as inserting a link twice are
//! not errors; see [`crate::MutationOutcome`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction, mutation, and analysis.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex identifier was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: usize,
        /// Number of vertices in the graph the id was checked against.
        vertex_count: usize,
    },
    /// A signed vertex count was negative.
    #[error("vertex count must be non-negative (got {got})")]
    InvalidVertexCount {
        /// The rejected count.
        got: i64,
    },
    /// An edge probability was not a number.
    #[error("edge probability must be a number (got {got})")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// A predecessor table did not cover every vertex of its graph.
    #[error("predecessor table has {actual} entries but the graph has {expected} vertices")]
    PredecessorLengthMismatch {
        /// Number of vertices in the graph.
        expected: usize,
        /// Number of entries supplied by the caller.
        actual: usize,
    },
    /// The operation is not defined for this kind of graph.
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Why the graph does not qualify.
        reason: &'static str,
    },
    /// Adjacency storage could not be reserved.
    #[error("failed to allocate adjacency storage for {requested} entries")]
    AllocationFailed {
        /// Number of entries that could not be reserved.
        requested: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex identifier was outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// A signed vertex count was negative.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// An edge probability was not a number.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// A predecessor table did not match its graph.
        PredecessorLengthMismatch => PredecessorLengthMismatch { .. } => "GRAPH_PREDECESSOR_LENGTH_MISMATCH",
        /// The operation is not defined for this kind of graph.
        UnsupportedOperation => UnsupportedOperation { .. } => "GRAPH_UNSUPPORTED_OPERATION",
        /// Adjacency storage could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "GRAPH_ALLOCATION_FAILED",
    }
}

/// Broad classes of [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied an argument the graph cannot accept. No state
    /// was mutated.
    InvalidArgument,
    /// The operation does not apply to the graph's orientation.
    UnsupportedOperation,
    /// Memory could not be obtained. The graph under construction must not
    /// be used.
    ResourceExhaustion,
}

impl GraphError {
    /// Classifies the error.
    ///
    /// # Examples
    /// ```
    /// use graphe_core::{ErrorKind, GraphError};
    ///
    /// let err = GraphError::VertexOutOfRange { vertex: 4, vertex_count: 2 };
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. }
            | Self::InvalidVertexCount { .. }
            | Self::InvalidProbability { .. }
            | Self::PredecessorLengthMismatch { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::AllocationFailed { .. } => ErrorKind::ResourceExhaustion,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
