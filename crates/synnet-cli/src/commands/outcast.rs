use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use synnet_lib::{ConceptIndex, Outcast};

use super::index_loader::{IndexPaths, load_index};
use super::output::{emit, to_json};

pub struct OutcastArgs {
    pub index: IndexPaths,
    pub files: Vec<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct OutcastReport {
    file: String,
    outcast: Option<String>,
}

pub fn run(args: OutcastArgs) {
    let index = load_index(&args.index);
    emit(render(&index, &args.files, args.json));
}

/// One `<file>: <outcast>` line per file; `-` when a list has no outcast.
pub fn render(index: &ConceptIndex, files: &[PathBuf], json: bool) -> Result<String, String> {
    let outcast = Outcast::new(index);
    let reports = files
        .iter()
        .map(|path| report(&outcast, path))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        return to_json(&reports);
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|r| format!("{}: {}", r.file, r.outcast.as_deref().unwrap_or("-")))
        .collect();
    Ok(lines.join("\n"))
}

fn report(outcast: &Outcast<'_>, path: &Path) -> Result<OutcastReport, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    let nouns: Vec<&str> = text.split_whitespace().collect();

    let found = outcast
        .outcast(nouns.as_slice())
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    Ok(OutcastReport {
        file: path.display().to_string(),
        outcast: found.map(str::to_owned),
    })
}
