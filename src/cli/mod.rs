//! Command-line interface module.

mod args;
pub mod clean;

pub use args::Cli;
