//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Word-level commands share the `--synsets`/`--hypernyms` pair.

use clap::Command;

use super::args::*;

/// Add the index input files and `--json`.
fn with_index_args(cmd: Command) -> Command {
    cmd.arg(synsets_arg()).arg(hypernyms_arg()).arg(json_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("synnet")
        .about("Semantic distance and shortest common ancestors over a noun hierarchy")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(distance_command())
        .subcommand(sca_command())
        .subcommand(outcast_command())
        .subcommand(nouns_command())
        .subcommand(check_command())
        .subcommand(ancestor_command())
}

/// Length of the shortest ancestral path between two nouns.
pub fn distance_command() -> Command {
    let cmd = Command::new("distance")
        .about("Distance between two nouns")
        .after_help(
            r#"EXAMPLES:
  synnet distance --synsets synsets.txt --hypernyms hypernyms.txt horse zebra"#,
        )
        .arg(noun_pair_arg());

    with_index_args(cmd)
}

/// Shortest common ancestor of two nouns.
pub fn sca_command() -> Command {
    let cmd = Command::new("sca")
        .about("Shortest common ancestor synset of two nouns")
        .after_help(
            r#"EXAMPLES:
  synnet sca --synsets synsets.txt --hypernyms hypernyms.txt individual edible_fruit"#,
        )
        .arg(noun_pair_arg());

    with_index_args(cmd)
}

/// Least related noun of each list.
pub fn outcast_command() -> Command {
    let cmd = Command::new("outcast")
        .about("Find the least related noun in each file")
        .after_help(
            r#"EXAMPLES:
  synnet outcast --synsets synsets.txt --hypernyms hypernyms.txt outcast5.txt outcast8.txt"#,
        )
        .arg(noun_files_arg());

    with_index_args(cmd)
}

/// Every noun of the index.
pub fn nouns_command() -> Command {
    let cmd = Command::new("nouns")
        .about("List every noun")
        .arg(count_arg());

    with_index_args(cmd)
}

/// Validate the input files.
pub fn check_command() -> Command {
    let cmd = Command::new("check").about("Validate synsets and hypernyms and print a summary");

    with_index_args(cmd)
}

/// Subset query over a plain digraph file.
pub fn ancestor_command() -> Command {
    Command::new("ancestor")
        .about("Shortest ancestral path between two vertex sets of a digraph")
        .override_usage("  synnet ancestor <DIGRAPH> -a <V,..> -b <V,..>")
        .after_help(
            r#"EXAMPLES:
  synnet ancestor digraph25.txt -a 13,23,24 -b 6,16,17
  synnet ancestor digraph25.txt -a 3 -b 11 --json"#,
        )
        .arg(digraph_arg())
        .arg(subset_a_arg())
        .arg(subset_b_arg())
        .arg(json_arg())
}
