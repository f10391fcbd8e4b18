pub mod ancestor;
pub mod check;
pub mod distance;
pub mod index_loader;
pub mod nouns;
pub mod outcast;
pub mod output;
pub mod sca;

#[cfg(test)]
mod test_utils;
