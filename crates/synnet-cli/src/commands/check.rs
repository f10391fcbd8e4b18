use serde::Serialize;
use synnet_lib::{ConceptIndex, Vertex};

use super::index_loader::{IndexPaths, load_index};
use super::output::{emit, to_json};

pub struct CheckArgs {
    pub index: IndexPaths,
    pub json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    concepts: usize,
    nouns: usize,
    edges: usize,
    root: Vertex,
    root_synset: &'a str,
}

/// Loading the index validates it; failures exit through `load_index`.
pub fn run(args: CheckArgs) {
    let index = load_index(&args.index);
    emit(render(&index, args.json));
}

pub fn render(index: &ConceptIndex, json: bool) -> Result<String, String> {
    let root = index.graph().root();
    let root_synset = index
        .concept(root)
        .map(|concept| concept.synonyms.as_str())
        .ok_or_else(|| format!("root synset {} has no record", root))?;

    let summary = Summary {
        concepts: index.concept_count(),
        nouns: index.noun_count(),
        edges: index.graph().edge_count(),
        root,
        root_synset,
    };

    if json {
        return to_json(&summary);
    }
    Ok(format!(
        "concepts: {}\nnouns:    {}\nedges:    {}\nroot:     {} ({})",
        summary.concepts, summary.nouns, summary.edges, summary.root, summary.root_synset
    ))
}
