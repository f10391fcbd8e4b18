//! Typed vertex handles and validated vertex subsets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A vertex of a `ConceptGraph`, i.e. a concept id.
///
/// Vertices are ordered by id. A vertex carries no reference to its graph;
/// queries check that it lies in `[0, vertex_count)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(u32);

impl Vertex {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Position in dense per-vertex tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty set of vertices, sorted by id with duplicates removed.
///
/// Used as the source set of a multi-source search, and as the sense set of
/// a polysemous word.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct VertexSet(Vec<Vertex>);

impl VertexSet {
    /// Collect vertices into a set. Fails with `EmptyVertexSet` if none are given.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Result<Self> {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(Error::EmptyVertexSet);
        }
        vertices.sort_unstable();
        vertices.dedup();
        Ok(Self(vertices))
    }

    /// A set containing exactly one vertex.
    pub fn single(vertex: Vertex) -> Self {
        Self(vec![vertex])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.0.binary_search(&vertex).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    /// Largest vertex id, used for range checks.
    pub fn max(&self) -> Vertex {
        // Non-empty and sorted by construction.
        self.0[self.0.len() - 1]
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = Vertex;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Vertex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
