use std::path::PathBuf;

use synnet_lib::ConceptIndex;

use super::output::fail;

/// The two files every word-level command reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPaths {
    pub synsets: PathBuf,
    pub hypernyms: PathBuf,
}

pub fn load_index(paths: &IndexPaths) -> ConceptIndex {
    ConceptIndex::from_files(&paths.synsets, &paths.hypernyms).unwrap_or_else(|e| fail(e))
}
