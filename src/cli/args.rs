//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Nbscrub notebook cleaner CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(long)]
    pub verbose: bool,

    /// Notebook file to clean in place (a `.bak` copy is written first)
    #[arg(value_name = "NOTEBOOK", value_hint = clap::ValueHint::FilePath)]
    pub notebook: PathBuf,
}
