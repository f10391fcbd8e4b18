//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{AncestorSearch, AncestralPath, ConceptGraph, Vertex};

impl ConceptGraph {
    pub(crate) fn ensure_vertex(&self, vertex: Vertex) {
        if !self.contains(vertex) {
            panic!(
                "ConceptGraph: vertex {vertex} not found \
                 (graph has {} vertices; callers must range-check first)",
                self.vertex_count()
            );
        }
    }
}

impl AncestorSearch<'_> {
    pub(crate) fn ensure_common_ancestor(&self, best: Option<AncestralPath>) -> AncestralPath {
        best.unwrap_or_else(|| {
            panic!(
                "AncestorSearch: no common ancestor \
                 (root {} must be reachable from every vertex)",
                self.graph().root()
            )
        })
    }
}

/// Position of `vertex` on the DFS path. Vertices marked on-path are always on the stack.
pub(crate) fn ensure_on_path(stack: &[(Vertex, usize)], vertex: Vertex) -> usize {
    stack
        .iter()
        .position(|&(v, _)| v == vertex)
        .unwrap_or_else(|| panic!("cycle search: vertex {vertex} marked on-path but not on stack"))
}
