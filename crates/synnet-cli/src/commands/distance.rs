use serde::Serialize;
use synnet_lib::ConceptIndex;

use super::index_loader::{IndexPaths, load_index};
use super::output::{emit, to_json};

pub struct DistanceArgs {
    pub index: IndexPaths,
    pub nouns: [String; 2],
    pub json: bool,
}

#[derive(Serialize)]
struct DistanceReport<'a> {
    nouns: &'a [String; 2],
    distance: u32,
}

pub fn run(args: DistanceArgs) {
    let index = load_index(&args.index);
    emit(render(&index, &args.nouns, args.json));
}

pub fn render(index: &ConceptIndex, nouns: &[String; 2], json: bool) -> Result<String, String> {
    let [noun1, noun2] = nouns;
    let distance = index.distance(noun1, noun2).map_err(|e| e.to_string())?;

    if json {
        return to_json(&DistanceReport { nouns, distance });
    }
    Ok(distance.to_string())
}
