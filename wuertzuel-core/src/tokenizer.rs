//! Tokenizer: raw text to classified lexical tokens
//!
//! Hyphenated and space-separated forms of the same phrase produce the
//! same token sequence; fused compounds are split by greedy longest-match
//! decomposition against the lexicon.

use crate::error::TokenizationError;
use crate::lexicon::{LexicalEntry, Lexicon, Role};

/// One classified input segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased surface form
    pub surface: String,
    /// Semantic role from the lexicon, `Unknown` when unmatched
    pub role: Role,
    /// Numeric payload for Unit/Teen/Ten/Scale/Month roles
    pub value: Option<i64>,
}

impl Token {
    fn from_entry(surface: &str, entry: LexicalEntry) -> Self {
        let value = match entry.role {
            Role::Unit | Role::Teen | Role::Ten | Role::Scale | Role::Month => Some(entry.value),
            _ => None,
        };
        Self {
            surface: surface.to_string(),
            role: entry.role,
            value,
        }
    }

    fn unknown(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            role: Role::Unknown,
            value: None,
        }
    }
}

/// Split `text` into classified tokens
///
/// Lowercases, splits on whitespace, commas and hyphens, classifies each
/// segment via the lexicon and falls back to compound decomposition.
/// Segments that resist both become `Unknown` tokens; deciding whether
/// that aborts the parse is the caller's job.
pub fn tokenize(lexicon: &Lexicon, text: &str) -> Result<Vec<Token>, TokenizationError> {
    if text.trim().is_empty() {
        return Err(TokenizationError::EmptyInput);
    }

    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut saw_word = false;

    for segment in lowered.split(|c: char| c.is_whitespace() || c == '-' || c == ',') {
        if segment.is_empty() || !segment.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        saw_word = true;

        if let Some(entry) = lexicon.lookup(segment) {
            tokens.push(Token::from_entry(segment, entry));
            continue;
        }

        match lexicon.decompose(segment) {
            Some(parts) => {
                tracing::debug!(segment, ?parts, "decomposed fused compound");
                for part in &parts {
                    match lexicon.lookup(part) {
                        Some(entry) => tokens.push(Token::from_entry(part, entry)),
                        None => tokens.push(Token::unknown(part)),
                    }
                }
            }
            None => tokens.push(Token::unknown(segment)),
        }
    }

    if !saw_word {
        return Err(TokenizationError::NoWordBoundaries);
    }

    Ok(tokens)
}
