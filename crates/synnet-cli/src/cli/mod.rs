mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{
    AncestorParams, CheckParams, DistanceParams, NounsParams, OutcastParams, ScaParams,
    parse_verbosity,
};
