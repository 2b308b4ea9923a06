//! wuertzuel command-line interface
//!
//! Converts Luxembourgish number and date words to their digit forms.

use anyhow::Result;
use clap::Parser;
use wuertzuel_cli::commands::Commands;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "wuertzuel",
    version,
    about = "Convert Luxembourgish number and date words to digits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
