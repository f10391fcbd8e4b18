//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Synsets file (--synsets).
pub fn synsets_arg() -> Arg {
    Arg::new("synsets")
        .long("synsets")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Synsets file (id,synonyms,definition per line)")
}

/// Hypernyms file (--hypernyms).
pub fn hypernyms_arg() -> Arg {
    Arg::new("hypernyms")
        .long("hypernyms")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Hypernyms file (id,parent,parent,... per line)")
}

/// The two nouns of a pair query (positional).
pub fn noun_pair_arg() -> Arg {
    Arg::new("nouns")
        .value_name("NOUN")
        .num_args(2)
        .required(true)
        .help("Two nouns to compare")
}

/// Noun-list files for outcast (positional, one or more).
pub fn noun_files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Files of whitespace-separated nouns")
}

/// Digraph file (positional).
pub fn digraph_arg() -> Arg {
    Arg::new("digraph")
        .value_name("DIGRAPH")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Digraph file: vertex count, edge count, then edge pairs")
}

/// First vertex subset (-a).
pub fn subset_a_arg() -> Arg {
    subset_arg("subset_a", 'a', "First vertex set (comma separated)")
}

/// Second vertex subset (-b).
pub fn subset_b_arg() -> Arg {
    subset_arg("subset_b", 'b', "Second vertex set (comma separated)")
}

fn subset_arg(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .value_name("V,..")
        .value_parser(value_parser!(u32))
        .value_delimiter(',')
        .action(ArgAction::Append)
        .required(true)
        .help(help)
}

/// Print only the number of nouns (--count).
pub fn count_arg() -> Arg {
    Arg::new("count")
        .long("count")
        .action(ArgAction::SetTrue)
        .help("Print the number of nouns instead of listing them")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Log verbosity (-v info, -vv debug, -vvv trace)")
}
