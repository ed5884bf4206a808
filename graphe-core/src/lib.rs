//! Graphe core library.
//!
//! Adjacency-list graphs with link mutation, G(n, p) random generation,
//! derived graphs and depth-first traversal.
//!
//! # Examples
//! ```
//! use graphe_core::{Graph, Orientation, components, traverse};
//!
//! let graph = Graph::from_links(4, Orientation::Undirected, &[(0, 1), (1, 2)])?;
//! let forest = traverse(&graph, 0)?;
//! assert_eq!(forest.discoveries(), &[Some(1), Some(2), Some(3), None]);
//! assert_eq!(components(&graph).labels(), &[0, 0, 0, 1]);
//! # Ok::<(), graphe_core::GraphError>(())
//! ```

mod derived;
mod error;
mod generator;
mod graph;
#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;
mod traversal;

pub use crate::{
    derived::{complement, induced_subgraph, line_graph, transpose},
    error::{ErrorKind, GraphError, GraphErrorCode, Result},
    generator::{
        EdgeProbability, GenerationStrategy, GeneratorBuilder, RandomGraphGenerator, VertexCount,
        generate_fixed_count, generate_per_pair,
    },
    graph::{Degrees, Graph, MutationOutcome, Orientation},
    traversal::{Components, DfsForest, components, predecessor_graph, traverse},
};
