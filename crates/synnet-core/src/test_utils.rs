//! Shared graph fixtures for unit tests.

use crate::{ConceptGraph, Error, Vertex, VertexSet};

/// The 25-vertex reference tree: every vertex above 0 has exactly one parent.
///
/// ```text
///                    0
///            1               2
///       3        4       5       6
///    7  8  9          10 11 12
///   13 14  15 16    17 18  19 20
///             21 22          23 24
/// ```
pub const DIGRAPH25: &[(u32, u32)] = &[
    (1, 0),
    (2, 0),
    (3, 1),
    (4, 1),
    (5, 2),
    (6, 2),
    (7, 3),
    (8, 3),
    (9, 3),
    (10, 5),
    (11, 5),
    (12, 5),
    (13, 7),
    (14, 7),
    (15, 9),
    (16, 9),
    (17, 10),
    (18, 10),
    (19, 12),
    (20, 12),
    (21, 16),
    (22, 16),
    (23, 20),
    (24, 20),
];

/// Two vertices sharing two equally near ancestors (1 and 2), listed so BFS
/// discovers 2 before 1.
pub const DIAMOND: &[(u32, u32)] = &[(1, 0), (2, 0), (3, 2), (3, 1), (4, 2), (4, 1)];

pub fn v(id: u32) -> Vertex {
    Vertex::new(id)
}

pub fn set(ids: &[u32]) -> VertexSet {
    VertexSet::new(ids.iter().copied().map(Vertex::new)).unwrap()
}

fn edges(pairs: &[(u32, u32)]) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
    pairs.iter().map(|&(child, parent)| (v(child), v(parent)))
}

pub fn graph(vertex_count: usize, pairs: &[(u32, u32)]) -> ConceptGraph {
    ConceptGraph::build(vertex_count, edges(pairs)).unwrap()
}

pub fn build_err(vertex_count: usize, pairs: &[(u32, u32)]) -> Error {
    ConceptGraph::build(vertex_count, edges(pairs)).unwrap_err()
}

pub fn digraph25() -> ConceptGraph {
    graph(25, DIGRAPH25)
}

pub fn diamond() -> ConceptGraph {
    graph(5, DIAMOND)
}
