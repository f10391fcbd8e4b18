//! Shortest-common-ancestor queries.
//!
//! Both argument sets are expanded with a multi-source BFS toward the root.
//! Every vertex reached from both sides is a common ancestor; the one with
//! the smallest combined hop count is the shortest common ancestor. Because
//! the graph is rooted, the root is always reached from both sides.
//!
//! Ties on the combined hop count resolve to the lowest vertex id.

use std::collections::VecDeque;

use serde::Serialize;

use crate::{ConceptGraph, DistanceMap, Error, Result, Vertex, VertexSet};

/// A shortest common ancestor together with the length of the ancestral path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AncestralPath {
    pub ancestor: Vertex,
    /// Hops from the first argument to `ancestor` plus hops from the second.
    pub length: u32,
}

/// Stateless query engine over a borrowed graph.
///
/// Each query allocates its own frontier and distance maps, so one search
/// (or many sharing a graph) can serve concurrent readers.
#[derive(Debug, Clone, Copy)]
pub struct AncestorSearch<'g> {
    graph: &'g ConceptGraph,
}

impl<'g> AncestorSearch<'g> {
    pub fn new(graph: &'g ConceptGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g ConceptGraph {
        self.graph
    }

    /// Multi-source BFS along outgoing edges.
    ///
    /// Every source starts at distance 0; vertices not reachable from the
    /// sources are absent from the result.
    pub fn bfs_distances(&self, sources: &VertexSet) -> Result<DistanceMap> {
        self.check_range(sources)?;

        let mut distances = DistanceMap::with_capacity(sources.len());
        let mut frontier = VecDeque::with_capacity(sources.len());
        for source in sources {
            distances.visit(source, 0);
            frontier.push_back((source, 0));
        }

        while let Some((vertex, distance)) = frontier.pop_front() {
            for &parent in self.graph.parents(vertex) {
                if distances.visit(parent, distance + 1) {
                    frontier.push_back((parent, distance + 1));
                }
            }
        }

        tracing::trace!(
            sources = sources.len(),
            reached = distances.len(),
            "bfs distances computed"
        );
        Ok(distances)
    }

    /// Length of the shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: Vertex, w: Vertex) -> Result<u32> {
        self.length_of_subsets(&VertexSet::single(v), &VertexSet::single(w))
    }

    /// A shortest common ancestor of `v` and `w`.
    pub fn ancestor(&self, v: Vertex, w: Vertex) -> Result<Vertex> {
        self.ancestor_of_subsets(&VertexSet::single(v), &VertexSet::single(w))
    }

    /// Length of the shortest ancestral path between any `a` in `subset_a`
    /// and any `b` in `subset_b`.
    pub fn length_of_subsets(&self, subset_a: &VertexSet, subset_b: &VertexSet) -> Result<u32> {
        Ok(self.common_ancestor(subset_a, subset_b)?.length)
    }

    /// A shortest common ancestor of the two subsets.
    pub fn ancestor_of_subsets(
        &self,
        subset_a: &VertexSet,
        subset_b: &VertexSet,
    ) -> Result<Vertex> {
        Ok(self.common_ancestor(subset_a, subset_b)?.ancestor)
    }

    /// Ancestor and length from a single pair of searches.
    pub fn common_ancestor(
        &self,
        subset_a: &VertexSet,
        subset_b: &VertexSet,
    ) -> Result<AncestralPath> {
        let from_a = self.bfs_distances(subset_a)?;
        let from_b = self.bfs_distances(subset_b)?;

        let best = from_a
            .common(&from_b)
            .min_by_key(|&(vertex, total)| (total, vertex))
            .map(|(ancestor, length)| AncestralPath { ancestor, length });

        Ok(self.ensure_common_ancestor(best))
    }

    fn check_range(&self, set: &VertexSet) -> Result<()> {
        let max = set.max();
        if self.graph.contains(max) {
            return Ok(());
        }
        Err(Error::InvalidArgument(format!(
            "vertex {max} out of range (graph has {} vertices)",
            self.graph.vertex_count()
        )))
    }
}
