mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{
    AncestorParams, CheckParams, DistanceParams, NounsParams, OutcastParams, ScaParams, build_cli,
    parse_verbosity,
};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(parse_verbosity(&matches));

    match matches.subcommand() {
        Some(("distance", m)) => {
            let params = DistanceParams::from_matches(m);
            commands::distance::run(params.into());
        }
        Some(("sca", m)) => {
            let params = ScaParams::from_matches(m);
            commands::sca::run(params.into());
        }
        Some(("outcast", m)) => {
            let params = OutcastParams::from_matches(m);
            commands::outcast::run(params.into());
        }
        Some(("nouns", m)) => {
            let params = NounsParams::from_matches(m);
            commands::nouns::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ancestor", m)) => {
            let params = AncestorParams::from_matches(m);
            commands::ancestor::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
