//! Date conversion command

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use wuertzuel_core::{DateResult, NumberNormalizer};

use super::{collect_inputs, init_logging, open_output, OutputFormat};
use crate::error::CliError;

/// Arguments for the date command
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Date phrases to convert (reads stdin lines when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One converted date, as serialized in JSON output
#[derive(Debug, Serialize)]
struct DateRecord {
    input: String,
    #[serde(flatten)]
    date: DateResult,
    formatted: String,
}

impl DateArgs {
    /// Execute the date command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);
        log::info!("converting date phrases");

        let normalizer =
            NumberNormalizer::new().map_err(|e| CliError::ConfigError(e.to_string()))?;

        let inputs = collect_inputs(&self.text)?;
        let mut records = Vec::with_capacity(inputs.len());
        for input in inputs {
            let date = normalizer
                .parse_date(&input)
                .map_err(|e| CliError::ParseFailed(format!("'{input}': {e}")))?;
            let formatted = date.to_numeric();
            log::debug!("'{input}' -> {formatted}");
            records.push(DateRecord {
                input,
                date,
                formatted,
            });
        }

        let mut writer = open_output(self.output.as_deref())?;
        match self.format {
            OutputFormat::Text => {
                for record in &records {
                    writeln!(writer, "{}", record.formatted)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &records)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
