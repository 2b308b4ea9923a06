//! Layered error types
//!
//! Each parsing layer reports its own failure kind; the public surface
//! wraps them into a single `ParseError`.

use thiserror::Error;

/// Tokenizer failures: the input has no recognizable structure at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// Empty or whitespace-only input
    #[error("empty input")]
    EmptyInput,

    /// Input contains no alphabetic word segment
    #[error("input contains no recognizable word boundaries")]
    NoWordBoundaries,
}

/// Token sequences that match no accepted compounding pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Word is not in the lexicon and resists compound decomposition
    #[error("unknown number word '{word}'")]
    UnknownWord {
        /// The offending surface form
        word: String,
    },

    /// Connector particle without a unit/ten pairing around it
    #[error("connector '{word}' has no unit/ten pairing")]
    DanglingConnector {
        /// The connector surface form
        word: String,
    },

    /// Scale word repeated or applied out of descending order
    #[error("scale word '{word}' repeated or out of order")]
    ScaleOutOfOrder {
        /// The scale surface form
        word: String,
    },

    /// Two tokens that cannot combine in this order
    #[error("'{word}' cannot follow '{prev}' in a number phrase")]
    InvalidSequence {
        /// The preceding surface form
        prev: String,
        /// The offending surface form
        word: String,
    },

    /// Zero is only valid standalone or as a fractional digit
    #[error("'{word}' is only valid standalone or as a fractional digit")]
    MisplacedZero {
        /// The zero surface form
        word: String,
    },

    /// Decimal mark in a position where none is allowed
    #[error("misplaced decimal mark '{word}'")]
    MisplacedDecimalMark {
        /// The decimal-mark surface form
        word: String,
    },

    /// Fraction side token that is not a single digit
    #[error("'{word}' is not a single digit after the decimal mark")]
    NonDigitFraction {
        /// The offending surface form
        word: String,
    },

    /// Decimal mark with nothing after it
    #[error("no digits follow the decimal mark")]
    EmptyFraction,

    /// Empty token sequence
    #[error("empty number phrase")]
    EmptyPhrase,

    /// Word is neither an irregular ordinal stem nor a regular ordinal form
    #[error("'{word}' is not an ordinal form")]
    UnknownOrdinal {
        /// The offending surface form
        word: String,
    },
}

/// Date phrases that do not resolve to day/month(/year)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateGrammarError {
    /// Fewer words than the minimal `<ordinal> <month>` grammar
    #[error("date phrase needs at least an ordinal day and a month")]
    IncompletePhrase,

    /// Month word not found in the lexicon
    #[error("'{word}' is not a recognized month name")]
    UnknownMonth {
        /// The offending surface form
        word: String,
    },

    /// Leading word resolves neither as ordinal nor as cardinal day
    #[error("cannot resolve '{word}' as a day of the month")]
    InvalidDay {
        /// The offending surface form
        word: String,
    },

    /// Trailing year tokens do not parse as a cardinal
    #[error("cannot parse year: {0}")]
    InvalidYear(#[source] GrammarError),

    /// Tokenizer failure on the date phrase
    #[error(transparent)]
    Tokenization(#[from] TokenizationError),

    /// The embedded lexicon could not be loaded
    #[error("lexicon unavailable: {0}")]
    LexiconUnavailable(String),
}

/// Top-level error for the number-parsing surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenizer failure
    #[error(transparent)]
    Tokenization(#[from] TokenizationError),

    /// Grammar failure
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// Locale tag with no registered lexicon
    #[error("locale '{code}' is not supported")]
    UnsupportedLocale {
        /// The locale tag that is not supported
        code: String,
    },

    /// Invalid normalizer configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for number-parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrammarError::UnknownWord {
            word: "fuffzich".to_string(),
        };
        assert_eq!(err.to_string(), "unknown number word 'fuffzich'");

        let err = ParseError::UnsupportedLocale {
            code: "fr".to_string(),
        };
        assert_eq!(err.to_string(), "locale 'fr' is not supported");
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: ParseError = TokenizationError::EmptyInput.into();
        assert_eq!(err.to_string(), "empty input");

        let err: DateGrammarError = TokenizationError::NoWordBoundaries.into();
        assert_eq!(
            err.to_string(),
            "input contains no recognizable word boundaries"
        );
    }
}
