use serde::Serialize;
use synnet_lib::ConceptIndex;

use super::index_loader::{IndexPaths, load_index};
use super::output::{emit, to_json};

pub struct NounsArgs {
    pub index: IndexPaths,
    pub count: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct NounCount {
    count: usize,
}

pub fn run(args: NounsArgs) {
    let index = load_index(&args.index);
    emit(render(&index, args.count, args.json));
}

pub fn render(index: &ConceptIndex, count: bool, json: bool) -> Result<String, String> {
    match (count, json) {
        (true, true) => to_json(&NounCount {
            count: index.noun_count(),
        }),
        (true, false) => Ok(index.noun_count().to_string()),
        (false, true) => to_json(&index.nouns().collect::<Vec<_>>()),
        (false, false) => Ok(index.nouns().collect::<Vec<_>>().join("\n")),
    }
}
