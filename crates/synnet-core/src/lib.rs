#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for synnet concept hierarchies.
//!
//! Two layers:
//! - **Graph layer** (`ConceptGraph`): a validated, immutable rooted DAG whose
//!   edges point from a specific concept to a more general one.
//! - **Search layer** (`AncestorSearch`): stateless shortest-common-ancestor
//!   queries over a borrowed graph, for single vertices or vertex subsets.
//!
//! # Example
//!
//! ```
//! use synnet_core::{AncestorSearch, ConceptGraph, Vertex};
//!
//! // 1 -> 0, 2 -> 0, 3 -> 1
//! let graph = ConceptGraph::build(4, [(1, 0), (2, 0), (3, 1)].map(|(c, p)| {
//!     (Vertex::new(c), Vertex::new(p))
//! }))
//! .unwrap();
//!
//! let search = AncestorSearch::new(&graph);
//! assert_eq!(search.length(Vertex::new(3), Vertex::new(2)).unwrap(), 3);
//! assert_eq!(search.ancestor(Vertex::new(3), Vertex::new(2)).unwrap(), Vertex::new(0));
//! ```

mod distance;
mod error;
mod graph;
mod invariants;
mod search;
mod vertex;

#[cfg(test)]
mod search_tests;
#[cfg(test)]
mod test_utils;

pub use distance::DistanceMap;
pub use error::{Error, GraphDefect, Result};
pub use graph::ConceptGraph;
pub use search::{AncestorSearch, AncestralPath};
pub use vertex::{Vertex, VertexSet};
