//! CLI command implementations

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::error::CliError;

pub mod date;
pub mod number;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a number phrase to digits
    Number(number::NumberArgs),

    /// Convert a date phrase to its D.M.(YYYY) form
    Date(date::DateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported locale tags
    Locales,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Number(args) => args.execute(),
            Commands::Date(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Locales => {
                        for locale in ["lb", "lb_LU", "lb-LU"] {
                            println!("{locale}");
                        }
                    }
                    ListCommands::Formats => {
                        for format in ["text", "json"] {
                            println!("{format}");
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One converted value per line
    Text,
    /// JSON array of conversion records
    Json,
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Argument phrases, or stdin lines when no argument was given
pub(crate) fn collect_inputs(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    log::info!("no phrase arguments, reading stdin");
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

/// Writer for the selected output target
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .map_err(|_| CliError::OutputFailed(path.display().to_string()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
