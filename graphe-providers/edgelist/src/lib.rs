//! Flat edge-list persistence for [`graphe_core::Graph`].
//!
//! The format is a header line `directed vertex_count link_count`, with
//! `directed` written as `0` or `1`, followed by one `source target` line
//! per logical link. Undirected links are written once with
//! `source <= target`.
//!
//! ```text
//! 0 4 2
//! 0 1
//! 1 2
//! ```

mod errors;
mod reader;
mod writer;

pub use errors::EdgeListError;
pub use reader::{load_path, read_edge_list};
pub use writer::{save_path, write_edge_list};

#[cfg(test)]
mod tests;
