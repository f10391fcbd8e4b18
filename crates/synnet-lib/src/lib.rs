//! Synnet: semantic distance and shortest common ancestors over a noun hierarchy.
//!
//! Synsets (sets of synonymous nouns) form a rooted DAG through hypernym
//! edges. A noun may belong to several synsets, so every word-level query is
//! a subset query over the graph.
//!
//! # Example
//!
//! ```
//! use synnet_lib::{ConceptIndex, parse_hypernyms, parse_synsets};
//!
//! let synsets = parse_synsets("0,entity,\n1,animal beast,\n2,dog,\n3,cat,\n").unwrap();
//! let hypernyms = parse_hypernyms("1,0\n2,1\n3,1\n").unwrap();
//!
//! let index = ConceptIndex::build(synsets, hypernyms).unwrap();
//! assert_eq!(index.distance("dog", "cat").unwrap(), 2);
//! assert_eq!(index.sca("dog", "cat").unwrap(), "animal beast");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod index;
pub mod load;
pub mod outcast;
pub mod records;

#[cfg(test)]
mod test_utils;

pub use index::{Concept, ConceptIndex, IndexError};
pub use load::{LoadError, load_digraph};
pub use outcast::Outcast;
pub use records::{
    Digraph, HypernymRecord, ParseError, ParseErrorKind, SynsetRecord, parse_digraph,
    parse_hypernyms, parse_synsets,
};

pub use synnet_core::{
    AncestorSearch, AncestralPath, ConceptGraph, Error, GraphDefect, Result, Vertex, VertexSet,
};
