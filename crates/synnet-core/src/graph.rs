//! Validated rooted DAG of concepts.
//!
//! Edges point from a specific concept to a more general one (child to
//! parent). Construction checks the whole edge set once; the resulting graph
//! is immutable and never re-validated.

use indexmap::IndexSet;

use crate::{GraphDefect, Result, Vertex};

/// An immutable rooted DAG over the vertices `[0, vertex_count)`.
///
/// Invariants established by [`ConceptGraph::build`]:
/// - at least one vertex,
/// - no directed cycle,
/// - exactly one vertex without outgoing edges (the root).
#[derive(Debug, Clone)]
pub struct ConceptGraph {
    /// Outgoing neighbours per vertex, indexed by `Vertex::index`.
    /// Insertion order of the edge stream, duplicates removed.
    parents: Vec<Vec<Vertex>>,
    edge_count: usize,
    root: Vertex,
}

impl ConceptGraph {
    /// Build and validate a graph from `(child, parent)` pairs.
    pub fn build(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex)>,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphDefect::Empty.into());
        }

        let mut adjacency: Vec<IndexSet<Vertex>> = vec![IndexSet::new(); vertex_count];
        for (child, parent) in edges {
            for vertex in [child, parent] {
                if vertex.index() >= vertex_count {
                    return Err(GraphDefect::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    }
                    .into());
                }
            }
            adjacency[child.index()].insert(parent);
        }

        let parents: Vec<Vec<Vertex>> = adjacency
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();

        if let Some(path) = find_cycle(&parents) {
            return Err(GraphDefect::Cycle { path }.into());
        }

        let mut roots = parents
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(idx, _)| Vertex::new(idx as u32));
        let root = match (roots.next(), roots.count()) {
            (Some(root), 0) => root,
            (first, rest) => {
                let count = usize::from(first.is_some()) + rest;
                return Err(GraphDefect::RootCount { count }.into());
            }
        };

        let edge_count = parents.iter().map(Vec::len).sum();
        tracing::debug!(
            vertices = vertex_count,
            edges = edge_count,
            %root,
            "concept graph validated"
        );

        Ok(Self {
            parents,
            edge_count,
            root,
        })
    }

    /// Build from hypernym-shaped records: each child with its list of parents.
    pub fn from_records<P>(
        vertex_count: usize,
        records: impl IntoIterator<Item = (Vertex, P)>,
    ) -> Result<Self>
    where
        P: IntoIterator<Item = Vertex>,
    {
        let edges = records
            .into_iter()
            .flat_map(|(child, parents)| parents.into_iter().map(move |parent| (child, parent)));
        Self::build(vertex_count, edges)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The unique vertex without outgoing edges.
    #[inline]
    pub fn root(&self) -> Vertex {
        self.root
    }

    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex.index() < self.parents.len()
    }

    /// Outgoing neighbours of `vertex` (its more general concepts).
    ///
    /// # Panics
    /// Panics if `vertex` is not in the graph; check with [`contains`](Self::contains).
    pub fn parents(&self, vertex: Vertex) -> &[Vertex] {
        self.ensure_vertex(vertex);
        &self.parents[vertex.index()]
    }

    pub fn out_degree(&self, vertex: Vertex) -> usize {
        self.parents(vertex).len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.parents.len()).map(|idx| Vertex::new(idx as u32))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Iterative three-color DFS. Returns the first cycle found, closed
/// (first vertex repeated at the end).
fn find_cycle(parents: &[Vec<Vertex>]) -> Option<Vec<Vertex>> {
    let mut marks = vec![Mark::Unvisited; parents.len()];
    // (vertex, index of the next outgoing edge to explore)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for start in 0..parents.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::OnPath;
        stack.push((Vertex::new(start as u32), 0));

        while let Some(top) = stack.last_mut() {
            let (vertex, next) = *top;
            top.1 += 1;

            let Some(&parent) = parents[vertex.index()].get(next) else {
                marks[vertex.index()] = Mark::Done;
                stack.pop();
                continue;
            };

            match marks[parent.index()] {
                Mark::Unvisited => {
                    marks[parent.index()] = Mark::OnPath;
                    stack.push((parent, 0));
                }
                Mark::OnPath => {
                    let from = crate::invariants::ensure_on_path(&stack, parent);
                    let mut path: Vec<Vertex> = stack[from..].iter().map(|&(v, _)| v).collect();
                    path.push(parent);
                    return Some(path);
                }
                Mark::Done => {}
            }
        }
    }

    None
}
