//! Per-query hop counts produced by a multi-source BFS.

use indexmap::IndexMap;

use crate::Vertex;

/// Hop distance from a source set to every vertex it reaches.
///
/// Unreachable vertices are absent rather than mapped to a sentinel.
/// Entries iterate in discovery order, so distances are non-decreasing.
/// A map is created by one search and dropped with the query that made it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap {
    distances: IndexMap<Vertex, u32>,
}

impl DistanceMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            distances: IndexMap::with_capacity(capacity),
        }
    }

    /// Record `vertex` at `distance` unless it was already reached.
    /// Returns whether the vertex was newly recorded.
    pub(crate) fn visit(&mut self, vertex: Vertex, distance: u32) -> bool {
        if self.distances.contains_key(&vertex) {
            return false;
        }
        self.distances.insert(vertex, distance);
        true
    }

    #[inline]
    pub fn get(&self, vertex: Vertex) -> Option<u32> {
        self.distances.get(&vertex).copied()
    }

    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Number of reached vertices, sources included.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reached vertices with their distances, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, u32)> + '_ {
        self.distances.iter().map(|(&v, &d)| (v, d))
    }

    /// Vertices reached by both maps with the sum of their two distances.
    ///
    /// Walks the smaller map and probes the larger one.
    pub fn common<'a>(
        &'a self,
        other: &'a DistanceMap,
    ) -> impl Iterator<Item = (Vertex, u32)> + 'a {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter_map(move |(v, d)| large.get(v).map(|e| (v, d + e)))
    }
}
