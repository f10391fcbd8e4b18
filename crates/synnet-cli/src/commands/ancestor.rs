use std::path::PathBuf;

use synnet_lib::{AncestorSearch, ConceptGraph, Vertex, VertexSet, load_digraph};

use super::output::{emit, fail, to_json};

pub struct AncestorArgs {
    pub digraph: PathBuf,
    pub subset_a: Vec<u32>,
    pub subset_b: Vec<u32>,
    pub json: bool,
}

pub fn run(args: AncestorArgs) {
    let graph = load_digraph(&args.digraph).unwrap_or_else(|e| fail(e));
    emit(render(&graph, &args.subset_a, &args.subset_b, args.json));
}

pub fn render(
    graph: &ConceptGraph,
    subset_a: &[u32],
    subset_b: &[u32],
    json: bool,
) -> Result<String, String> {
    let subset_a = vertex_set(subset_a)?;
    let subset_b = vertex_set(subset_b)?;

    let path = AncestorSearch::new(graph)
        .common_ancestor(&subset_a, &subset_b)
        .map_err(|e| e.to_string())?;

    if json {
        return to_json(&path);
    }
    Ok(format!("length:   {}\nancestor: {}", path.length, path.ancestor))
}

fn vertex_set(ids: &[u32]) -> Result<VertexSet, String> {
    VertexSet::new(ids.iter().copied().map(Vertex::new)).map_err(|e| e.to_string())
}
