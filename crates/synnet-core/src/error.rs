//! Errors shared by graph construction and ancestor queries.

use crate::Vertex;

/// Errors that can occur while building a graph or answering a query.
///
/// All variants are deterministic logic errors: retrying the same call
/// yields the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required argument is missing or refers to something that does not exist.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex subset argument has no elements.
    #[error("vertex set is empty")]
    EmptyVertexSet,

    /// A word is not registered in the index.
    #[error("`{0}` is not a known noun")]
    UnknownWord(String),

    /// The edge set does not describe a rooted DAG.
    #[error("invalid graph: {0}")]
    InvalidGraph(GraphDefect),
}

/// The specific reason a graph failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphDefect {
    #[error("graph has no vertices")]
    Empty,

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    /// `path` starts and ends at the same vertex.
    #[error("cycle detected: {}", render_path(.path))]
    Cycle { path: Vec<Vertex> },

    #[error("expected exactly one root, found {count}")]
    RootCount { count: usize },
}

impl From<GraphDefect> for Error {
    fn from(defect: GraphDefect) -> Self {
        Self::InvalidGraph(defect)
    }
}

fn render_path(path: &[Vertex]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
