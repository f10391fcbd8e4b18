//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull the fields each command uses
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::ancestor::AncestorArgs;
use crate::commands::check::CheckArgs;
use crate::commands::distance::DistanceArgs;
use crate::commands::index_loader::IndexPaths;
use crate::commands::nouns::NounsArgs;
use crate::commands::outcast::OutcastArgs;
use crate::commands::sca::ScaArgs;

pub struct DistanceParams {
    pub index: IndexPaths,
    pub nouns: [String; 2],
    pub json: bool,
}

impl DistanceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            index: parse_index_paths(m),
            nouns: parse_noun_pair(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<DistanceParams> for DistanceArgs {
    fn from(p: DistanceParams) -> Self {
        Self {
            index: p.index,
            nouns: p.nouns,
            json: p.json,
        }
    }
}

pub struct ScaParams {
    pub index: IndexPaths,
    pub nouns: [String; 2],
    pub json: bool,
}

impl ScaParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            index: parse_index_paths(m),
            nouns: parse_noun_pair(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<ScaParams> for ScaArgs {
    fn from(p: ScaParams) -> Self {
        Self {
            index: p.index,
            nouns: p.nouns,
            json: p.json,
        }
    }
}

pub struct OutcastParams {
    pub index: IndexPaths,
    pub files: Vec<PathBuf>,
    pub json: bool,
}

impl OutcastParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            index: parse_index_paths(m),
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<OutcastParams> for OutcastArgs {
    fn from(p: OutcastParams) -> Self {
        Self {
            index: p.index,
            files: p.files,
            json: p.json,
        }
    }
}

pub struct NounsParams {
    pub index: IndexPaths,
    pub count: bool,
    pub json: bool,
}

impl NounsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            index: parse_index_paths(m),
            count: m.get_flag("count"),
            json: m.get_flag("json"),
        }
    }
}

impl From<NounsParams> for NounsArgs {
    fn from(p: NounsParams) -> Self {
        Self {
            index: p.index,
            count: p.count,
            json: p.json,
        }
    }
}

pub struct CheckParams {
    pub index: IndexPaths,
    pub json: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            index: parse_index_paths(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            index: p.index,
            json: p.json,
        }
    }
}

pub struct AncestorParams {
    pub digraph: PathBuf,
    pub subset_a: Vec<u32>,
    pub subset_b: Vec<u32>,
    pub json: bool,
}

impl AncestorParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            digraph: m
                .get_one::<PathBuf>("digraph")
                .cloned()
                .unwrap_or_default(),
            subset_a: parse_subset(m, "subset_a"),
            subset_b: parse_subset(m, "subset_b"),
            json: m.get_flag("json"),
        }
    }
}

impl From<AncestorParams> for AncestorArgs {
    fn from(p: AncestorParams) -> Self {
        Self {
            digraph: p.digraph,
            subset_a: p.subset_a,
            subset_b: p.subset_b,
            json: p.json,
        }
    }
}

/// Verbosity count from the top-level matches (`-v` is global).
pub fn parse_verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_index_paths(m: &ArgMatches) -> IndexPaths {
    let path = |id: &str| m.get_one::<PathBuf>(id).cloned().unwrap_or_default();
    IndexPaths {
        synsets: path("synsets"),
        hypernyms: path("hypernyms"),
    }
}

/// Both nouns are required, so clap guarantees two values.
fn parse_noun_pair(m: &ArgMatches) -> [String; 2] {
    let mut nouns = m.get_many::<String>("nouns").into_iter().flatten().cloned();
    [
        nouns.next().unwrap_or_default(),
        nouns.next().unwrap_or_default(),
    ]
}

fn parse_subset(m: &ArgMatches, id: &str) -> Vec<u32> {
    m.get_many::<u32>(id)
        .map(|ids| ids.copied().collect())
        .unwrap_or_default()
}
