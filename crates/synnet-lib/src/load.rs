//! Reading indexes and digraphs from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use synnet_core::ConceptGraph;

use crate::records::{ParseError, parse_digraph, parse_hypernyms, parse_synsets};
use crate::{ConceptIndex, IndexError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Graph(#[from] synnet_core::Error),
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })
}

fn parsed<T>(path: &Path, result: Result<T, ParseError>) -> Result<T, LoadError> {
    result.map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}

impl ConceptIndex {
    /// Read a synsets file and a hypernyms file and build the index.
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let (synsets, hypernyms) = (synsets.as_ref(), hypernyms.as_ref());
        tracing::info!(
            synsets = %synsets.display(),
            hypernyms = %hypernyms.display(),
            "loading noun index"
        );

        let synset_records = parsed(synsets, parse_synsets(&read(synsets)?))?;
        let hypernym_records = parsed(hypernyms, parse_hypernyms(&read(hypernyms)?))?;

        Ok(Self::build(synset_records, hypernym_records)?)
    }
}

/// Read and validate a digraph file (`V`, `E`, then `E` edge pairs).
pub fn load_digraph(path: impl AsRef<Path>) -> Result<ConceptGraph, LoadError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading digraph");

    let digraph = parsed(path, parse_digraph(&read(path)?))?;
    Ok(digraph.into_graph()?)
}
