//! Number conversion command

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use wuertzuel_core::{DecimalSeparator, NormalizerConfig, NumberNormalizer, NumberValue};

use super::{collect_inputs, init_logging, open_output, OutputFormat};
use crate::error::CliError;

/// Arguments for the number command
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Number phrases to convert (reads stdin lines when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Locale tag selecting the lexicon
    #[arg(short, long, default_value = "lb")]
    pub locale: String,

    /// Decimal separator in formatted output
    #[arg(short, long, value_enum, default_value = "point")]
    pub separator: Separator,

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

/// Decimal separator choice on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Separator {
    /// "3.4"
    Point,
    /// "3,4"
    Comma,
}

impl From<Separator> for DecimalSeparator {
    fn from(separator: Separator) -> Self {
        match separator {
            Separator::Point => DecimalSeparator::Point,
            Separator::Comma => DecimalSeparator::Comma,
        }
    }
}

/// One converted number, as serialized in JSON output
#[derive(Debug, Serialize)]
struct NumberRecord {
    input: String,
    #[serde(flatten)]
    value: NumberValue,
    formatted: String,
}

impl NumberArgs {
    /// Execute the number command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);
        log::info!("converting number phrases, locale={}", self.locale);

        let config = NormalizerConfig::builder()
            .locale(&self.locale)
            .decimal_separator(self.separator.into())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let normalizer = NumberNormalizer::with_config(config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let inputs = collect_inputs(&self.text)?;
        let mut records = Vec::with_capacity(inputs.len());
        for input in inputs {
            let value = normalizer
                .parse_number(&input)
                .map_err(|e| CliError::ParseFailed(format!("'{input}': {e}")))?;
            let formatted = value.format(self.separator.into());
            log::debug!("'{input}' -> {formatted}");
            records.push(NumberRecord {
                input,
                value,
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
