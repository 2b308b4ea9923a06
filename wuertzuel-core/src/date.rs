//! Date composition
//!
//! Parses `<ordinal day> <month> [<year>]` phrases and renders them as
//! "D.M." or "D.M.YYYY". The n-rule check is informational: a suffix that
//! disagrees with the month's initial sound flags the result and logs a
//! warning, but never changes the value.

use serde::Serialize;

use crate::cardinal::parse_cardinal;
use crate::error::DateGrammarError;
use crate::lexicon::Lexicon;
use crate::nrule::Suffix;
use crate::ordinal::{resolve_ordinal, SuffixState};
use crate::tokenizer::tokenize;

/// Parsed date: day and month by grammar, year when spoken
///
/// Day and month are range-checked by the grammar only; calendar validity
/// (Feb 30) is deliberately not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateResult {
    pub day: u32,
    pub month: u32,
    pub year: Option<i64>,
    /// The ordinal's observed suffix disagrees with the n-rule
    pub suffix_mismatch: bool,
}

impl DateResult {
    /// Render as "D.M." (no year) or "D.M.YYYY"
    pub fn to_numeric(&self) -> String {
        match self.year {
            Some(year) => format!("{}.{}.{}", self.day, self.month, year),
            None => format!("{}.{}.", self.day, self.month),
        }
    }
}

/// Parse a date phrase against a loaded lexicon
pub(crate) fn parse_with(lexicon: &Lexicon, text: &str) -> Result<DateResult, DateGrammarError> {
    if text.trim().is_empty() {
        return Err(DateGrammarError::Tokenization(
            crate::error::TokenizationError::EmptyInput,
        ));
    }

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .filter(|s| !s.is_empty() && s.chars().any(|c| c.is_alphabetic()))
        .collect();

    if words.len() < 2 {
        return Err(DateGrammarError::IncompletePhrase);
    }

    // Day: ordinal resolution first, cardinal reading as fallback
    let (day_value, observed_suffix, mut month_index) = match resolve_ordinal(lexicon, words[0]) {
        Ok(ordinal) => {
            // Detached inflection: "zéngt en Abrëll"
            if ordinal.suffix == SuffixState::Ambiguous
                && words.len() > 2
                && lexicon.is_inflection(words[1])
            {
                let state = if words[1].ends_with('n') {
                    SuffixState::Kept
                } else {
                    SuffixState::Dropped
                };
                (ordinal.value, state, 2)
            } else {
                (ordinal.value, ordinal.suffix, 1)
            }
        }
        Err(_) => {
            let day = tokenize(lexicon, words[0])
                .ok()
                .and_then(|tokens| parse_cardinal(&tokens).ok())
                .ok_or_else(|| DateGrammarError::InvalidDay {
                    word: words[0].to_string(),
                })?;
            (day, SuffixState::Ambiguous, 1)
        }
    };

    if !(1..=31).contains(&day_value) {
        return Err(DateGrammarError::InvalidDay {
            word: words[0].to_string(),
        });
    }

    let month_word = words[month_index];
    let month = lexicon
        .month(month_word)
        .ok_or_else(|| DateGrammarError::UnknownMonth {
            word: month_word.to_string(),
        })?
        .value;

    let suffix_mismatch = match (observed_suffix, lexicon.n_rule().expected_suffix(month_word)) {
        (SuffixState::Kept, Suffix::Dropped) | (SuffixState::Dropped, Suffix::Kept) => true,
        _ => false,
    };
    if suffix_mismatch {
        tracing::warn!(
            ordinal = words[0],
            month = month_word,
            "ordinal suffix disagrees with the n-rule"
        );
    }

    month_index += 1;
    let year = if month_index < words.len() {
        let tokens = tokenize(lexicon, &words[month_index..].join(" "))?;
        Some(parse_cardinal(&tokens).map_err(DateGrammarError::InvalidYear)?)
    } else {
        None
    };

    Ok(DateResult {
        day: day_value as u32,
        month: month as u32,
        year,
        suffix_mismatch,
    })
}
