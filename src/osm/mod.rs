pub mod parser;

pub use parser::{derive_samples, parse_forests, parse_trees};
