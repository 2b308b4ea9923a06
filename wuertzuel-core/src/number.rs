//! Decimal composition and number values
//!
//! The public number path splits the token stream at the decimal mark,
//! hands the left side to the cardinal parser and reads the right side
//! digit by digit. Fractional digits are positional: "néng fënnef" is
//! ".95", never ".14".

use serde::Serialize;

use crate::cardinal::parse_cardinal;
use crate::error::{GrammarError, ParseError};
use crate::lexicon::{Lexicon, Role};
use crate::ordinal::resolve_ordinal;
use crate::tokenizer::{tokenize, Token};

/// Decimal separator used when rendering a `NumberValue` as text
///
/// The spoken form does not pin down the written convention, so both are
/// first-class options rather than a hardcoded choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecimalSeparator {
    /// "3.4"
    #[default]
    Point,
    /// "3,4"
    Comma,
}

impl DecimalSeparator {
    fn as_char(self) -> char {
        match self {
            DecimalSeparator::Point => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Parsed numeric value
///
/// Decimals keep their fractional digits as a positional string so that
/// callers control the presentation ("2.95" keeps its trailing digits,
/// "100.01" keeps its leading zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NumberValue {
    /// A whole number
    Integer {
        /// The parsed value
        value: i64,
    },
    /// Integer part plus positional fractional digits
    Decimal {
        /// The integer part
        integer: i64,
        /// Fractional digits, most significant first
        fraction: String,
    },
}

impl NumberValue {
    /// Convenience constructor for whole numbers
    pub fn integer(value: i64) -> Self {
        NumberValue::Integer { value }
    }

    /// Lossy numeric view, fraction folded into an `f64`
    pub fn to_f64(&self) -> f64 {
        match self {
            NumberValue::Integer { value } => *value as f64,
            NumberValue::Decimal { integer, fraction } => {
                let mut result = *integer as f64;
                let mut place = 0.1;
                for digit in fraction.chars().filter_map(|c| c.to_digit(10)) {
                    result += f64::from(digit) * place;
                    place /= 10.0;
                }
                result
            }
        }
    }

    /// Render with the given decimal separator
    pub fn format(&self, separator: DecimalSeparator) -> String {
        match self {
            NumberValue::Integer { value } => value.to_string(),
            NumberValue::Decimal { integer, fraction } => {
                format!("{integer}{}{fraction}", separator.as_char())
            }
        }
    }
}

/// Parse a number phrase against a loaded lexicon
pub(crate) fn parse_with(lexicon: &Lexicon, text: &str) -> Result<NumberValue, ParseError> {
    let tokens = tokenize(lexicon, text)?;

    // A lone ordinal ("éischten") reads as its base cardinal value
    if tokens.len() == 1 && tokens[0].role == Role::Unknown {
        if let Ok(ordinal) = resolve_ordinal(lexicon, &tokens[0].surface) {
            return Ok(NumberValue::integer(ordinal.value));
        }
    }

    match tokens.iter().position(|t| t.role == Role::DecimalMark) {
        None => Ok(NumberValue::integer(parse_cardinal(&tokens)?)),
        Some(mark) => {
            // "komma véier" with no integer part reads as 0.4
            let integer = if mark == 0 {
                0
            } else {
                parse_cardinal(&tokens[..mark])?
            };
            let fraction = fraction_digits(&tokens[mark + 1..])?;
            Ok(NumberValue::Decimal { integer, fraction })
        }
    }
}

/// Concatenate fraction-side tokens into positional digits
fn fraction_digits(tokens: &[Token]) -> Result<String, GrammarError> {
    if tokens.is_empty() {
        return Err(GrammarError::EmptyFraction);
    }

    let mut digits = String::with_capacity(tokens.len());
    for token in tokens {
        match token.role {
            Role::Unit => {
                let value = token.value.unwrap_or(0);
                digits.push(char::from(b'0' + value as u8));
            }
            Role::DecimalMark => {
                return Err(GrammarError::MisplacedDecimalMark {
                    word: token.surface.clone(),
                });
            }
            _ => {
                return Err(GrammarError::NonDigitFraction {
                    word: token.surface.clone(),
                });
            }
        }
    }
    Ok(digits)
}
