use serde::Serialize;
use synnet_lib::{ConceptIndex, Vertex};

use super::index_loader::{IndexPaths, load_index};
use super::output::{emit, to_json};

pub struct ScaArgs {
    pub index: IndexPaths,
    pub nouns: [String; 2],
    pub json: bool,
}

#[derive(Serialize)]
struct ScaReport<'a> {
    nouns: &'a [String; 2],
    ancestor: Vertex,
    synset: &'a str,
    length: u32,
}

pub fn run(args: ScaArgs) {
    let index = load_index(&args.index);
    emit(render(&index, &args.nouns, args.json));
}

pub fn render(index: &ConceptIndex, nouns: &[String; 2], json: bool) -> Result<String, String> {
    let [noun1, noun2] = nouns;
    let synset = index.sca(noun1, noun2).map_err(|e| e.to_string())?;
    if !json {
        return Ok(synset.to_owned());
    }

    let path = index
        .shortest_common_ancestor(noun1, noun2)
        .map_err(|e| e.to_string())?;
    to_json(&ScaReport {
        nouns,
        ancestor: path.ancestor,
        synset,
        length: path.length,
    })
}
