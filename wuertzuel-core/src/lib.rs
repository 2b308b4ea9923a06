//! Inverse text normalization for Luxembourgish
//!
//! Converts natural-language number expressions ("véierafoffzeg") and date
//! expressions ("éischten Abrëll") into their numeric written forms (54;
//! "1.4."). The grammar is Luxembourgish-specific by design: fused
//! compounds, the unit-before-ten inversion, scale words, irregular
//! ordinals and the phonological n-rule are all first-class.
//!
//! # Example
//!
//! ```rust
//! use wuertzuel_core::{date_to_num, parse_number, NumberValue};
//!
//! let n = parse_number("véier-a-foffzeg", "lb").unwrap();
//! assert_eq!(n, NumberValue::integer(54));
//!
//! assert_eq!(date_to_num("éischten Abrëll").unwrap(), "1.4.");
//! ```

pub mod cardinal;
pub mod config;
pub mod date;
pub mod error;
pub mod lexicon;
pub mod nrule;
pub mod number;
pub mod ordinal;
pub mod tokenizer;

use std::sync::Arc;

use lexicon::Lexicon;

// Re-export the public surface
pub use date::DateResult;
pub use error::{DateGrammarError, GrammarError, ParseError, Result, TokenizationError};
pub use nrule::{NRule, Suffix};
pub use number::{DecimalSeparator, NumberValue};
pub use ordinal::{OrdinalResult, SuffixState};
pub use tokenizer::Token;

/// Configuration for a [`NumberNormalizer`]
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Locale tag selecting the lexicon ("lb", "lb_LU", "lb-LU")
    pub locale: String,
    /// Separator used when rendering decimal values as text
    pub decimal_separator: DecimalSeparator,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            locale: "lb".to_string(),
            decimal_separator: DecimalSeparator::default(),
        }
    }
}

impl NormalizerConfig {
    /// Create a builder
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    config: NormalizerConfig,
}

impl NormalizerConfigBuilder {
    /// Set the locale tag
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Set the decimal separator for formatted output
    pub fn decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<NormalizerConfig> {
        if self.config.locale.is_empty() {
            return Err(ParseError::Config("locale must not be empty".to_string()));
        }
        Ok(self.config)
    }
}

/// Main entry point for inverse text normalization
///
/// Holds a shared, immutable lexicon; every parse call is a pure read
/// against it plus call-local working state, so one normalizer can be
/// used from any number of threads.
pub struct NumberNormalizer {
    lexicon: Arc<Lexicon>,
    config: NormalizerConfig,
}

impl NumberNormalizer {
    /// Create a normalizer with the default configuration (Luxembourgish)
    pub fn new() -> Result<Self> {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer for a specific locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        let config = NormalizerConfig::builder().locale(locale).build()?;
        Self::with_config(config)
    }

    /// Create a normalizer with a custom configuration
    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        let lexicon = lexicon::get_lexicon(&config.locale)?;
        Ok(Self { lexicon, config })
    }

    /// Parse a number phrase into a [`NumberValue`]
    pub fn parse_number(&self, text: &str) -> Result<NumberValue> {
        number::parse_with(&self.lexicon, text)
    }

    /// Parse a number phrase and render it with the configured separator
    pub fn normalize_number(&self, text: &str) -> Result<String> {
        Ok(self
            .parse_number(text)?
            .format(self.config.decimal_separator))
    }

    /// Parse a date phrase into a [`DateResult`]
    pub fn parse_date(&self, text: &str) -> std::result::Result<DateResult, DateGrammarError> {
        date::parse_with(&self.lexicon, text)
    }

    /// Parse a date phrase and render it as "D.M." or "D.M.YYYY"
    pub fn date_to_num(&self, text: &str) -> std::result::Result<String, DateGrammarError> {
        Ok(self.parse_date(text)?.to_numeric())
    }

    /// Classify whether a word-final "-n" is kept before `following_word`
    pub fn expected_suffix(&self, following_word: &str) -> Suffix {
        self.lexicon.n_rule().expected_suffix(following_word)
    }

    /// The active configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// The loaded locale code
    pub fn locale(&self) -> &str {
        self.lexicon.code()
    }
}

// Convenience functions

/// Parse a number phrase with the given locale tag
pub fn parse_number(text: &str, locale: &str) -> Result<NumberValue> {
    let normalizer = NumberNormalizer::with_locale(locale)?;
    normalizer.parse_number(text)
}

/// Parse a Luxembourgish date phrase into "D.M." or "D.M.YYYY" form
pub fn date_to_num(text: &str) -> std::result::Result<String, DateGrammarError> {
    let normalizer = NumberNormalizer::new()
        .map_err(|e| DateGrammarError::LexiconUnavailable(e.to_string()))?;
    normalizer.date_to_num(text)
}
