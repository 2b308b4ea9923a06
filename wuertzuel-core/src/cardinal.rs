//! Cardinal number parser
//!
//! Folds a token sequence into an integer by magnitude accumulation. The
//! Luxembourgish inversion ("véier a foffzeg" = 4-and-50 = 54) is consumed
//! greedily as its own pattern before any token is treated standalone.

use crate::error::GrammarError;
use crate::lexicon::Role;
use crate::tokenizer::Token;

/// Working state for one parse call
///
/// `group` collects everything below the next scale fold and stays under
/// 1000 before a scale >= 1000 is applied; `total` only grows.
#[derive(Debug, Default)]
struct MagnitudeAccumulator {
    total: i64,
    group: i64,
    units_filled: bool,
    tens_filled: bool,
    hundred_applied: bool,
    last_scale: Option<i64>,
}

impl MagnitudeAccumulator {
    /// Add an inverted unit/ten pair ("véier a foffzeg") as one step
    fn add_pair(&mut self, unit: i64, ten: i64, word: &str, prev: &str) -> Result<(), GrammarError> {
        if self.units_filled || self.tens_filled {
            return Err(GrammarError::InvalidSequence {
                prev: prev.to_string(),
                word: word.to_string(),
            });
        }
        self.group += unit + ten;
        self.units_filled = true;
        self.tens_filled = true;
        Ok(())
    }

    /// Multiply the open group by 100 ("honnert"), implicit 1 when empty
    fn apply_hundred(&mut self, word: &str) -> Result<(), GrammarError> {
        if self.hundred_applied || self.group >= 100 {
            return Err(GrammarError::ScaleOutOfOrder {
                word: word.to_string(),
            });
        }
        self.group = if self.group == 0 { 100 } else { self.group * 100 };
        self.hundred_applied = true;
        self.units_filled = false;
        self.tens_filled = false;
        Ok(())
    }

    /// Fold the open group into the total ("dausend" and above)
    fn apply_scale(&mut self, value: i64, word: &str) -> Result<(), GrammarError> {
        if let Some(last) = self.last_scale {
            if last <= value {
                return Err(GrammarError::ScaleOutOfOrder {
                    word: word.to_string(),
                });
            }
        }
        if self.group >= 1000 {
            return Err(GrammarError::ScaleOutOfOrder {
                word: word.to_string(),
            });
        }
        let group = if self.group == 0 { 1 } else { self.group };
        self.total += group * value;
        self.group = 0;
        self.last_scale = Some(value);
        self.hundred_applied = false;
        self.units_filled = false;
        self.tens_filled = false;
        Ok(())
    }
}

fn value_of(token: &Token) -> i64 {
    token.value.unwrap_or(0)
}

/// Fold `tokens` into an integer
///
/// Deterministic and total over any tokenizer output; every sequence that
/// matches no accepted compounding pattern fails with a `GrammarError`.
pub fn parse_cardinal(tokens: &[Token]) -> Result<i64, GrammarError> {
    if tokens.is_empty() {
        return Err(GrammarError::EmptyPhrase);
    }

    // "null" is a complete phrase on its own, never part of a larger one
    if tokens.len() == 1 && tokens[0].role == Role::Unit && value_of(&tokens[0]) == 0 {
        return Ok(0);
    }

    let mut acc = MagnitudeAccumulator::default();
    let mut prev_surface = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        match token.role {
            Role::Unknown => {
                return Err(GrammarError::UnknownWord {
                    word: token.surface.clone(),
                });
            }
            Role::Unit => {
                let unit = value_of(token);
                if unit == 0 {
                    return Err(GrammarError::MisplacedZero {
                        word: token.surface.clone(),
                    });
                }
                // Inversion: unit (+ connector) + ten consumed as one step
                if let (Some(conn), Some(ten)) = (tokens.get(i + 1), tokens.get(i + 2)) {
                    if conn.role == Role::Connector && ten.role == Role::Ten {
                        acc.add_pair(unit, value_of(ten), &token.surface, &prev_surface)?;
                        tracing::debug!(
                            unit = %token.surface,
                            ten = %ten.surface,
                            "applied unit-and-ten inversion"
                        );
                        prev_surface = ten.surface.clone();
                        i += 3;
                        continue;
                    }
                }
                if let Some(ten) = tokens.get(i + 1) {
                    if ten.role == Role::Ten {
                        // Bare "véier foffzeg" with no connector
                        acc.add_pair(unit, value_of(ten), &token.surface, &prev_surface)?;
                        prev_surface = ten.surface.clone();
                        i += 2;
                        continue;
                    }
                }
                if acc.units_filled {
                    return Err(GrammarError::InvalidSequence {
                        prev: prev_surface,
                        word: token.surface.clone(),
                    });
                }
                acc.group += unit;
                acc.units_filled = true;
                prev_surface = token.surface.clone();
                i += 1;
            }
            Role::Teen => {
                if acc.units_filled || acc.tens_filled {
                    return Err(GrammarError::InvalidSequence {
                        prev: prev_surface,
                        word: token.surface.clone(),
                    });
                }
                acc.group += value_of(token);
                acc.units_filled = true;
                acc.tens_filled = true;
                prev_surface = token.surface.clone();
                i += 1;
            }
            Role::Ten => {
                // Symmetric reading of the inversion: ten + connector + unit
                if let (Some(conn), Some(unit)) = (tokens.get(i + 1), tokens.get(i + 2)) {
                    if conn.role == Role::Connector && unit.role == Role::Unit {
                        let unit_value = value_of(unit);
                        if unit_value == 0 {
                            return Err(GrammarError::MisplacedZero {
                                word: unit.surface.clone(),
                            });
                        }
                        acc.add_pair(unit_value, value_of(token), &token.surface, &prev_surface)?;
                        prev_surface = unit.surface.clone();
                        i += 3;
                        continue;
                    }
                }
                if acc.tens_filled {
                    return Err(GrammarError::InvalidSequence {
                        prev: prev_surface,
                        word: token.surface.clone(),
                    });
                }
                acc.group += value_of(token);
                acc.tens_filled = true;
                prev_surface = token.surface.clone();
                i += 1;
            }
            Role::Connector => {
                // Conjunctive "an" straight after a scale fold is a no-op
                // ("dräi dausend an eenhonnert zwanzeg"); anything else dangles
                let after_scale = i > 0 && tokens[i - 1].role == Role::Scale;
                let continues = matches!(
                    tokens.get(i + 1).map(|t| t.role),
                    Some(Role::Unit | Role::Teen | Role::Ten | Role::Scale)
                );
                if !(after_scale && continues) {
                    return Err(GrammarError::DanglingConnector {
                        word: token.surface.clone(),
                    });
                }
                prev_surface = token.surface.clone();
                i += 1;
            }
            Role::Scale => {
                let scale = value_of(token);
                if scale < 1000 {
                    acc.apply_hundred(&token.surface)?;
                } else {
                    acc.apply_scale(scale, &token.surface)?;
                }
                prev_surface = token.surface.clone();
                i += 1;
            }
            Role::DecimalMark => {
                return Err(GrammarError::MisplacedDecimalMark {
                    word: token.surface.clone(),
                });
            }
            Role::Month | Role::OrdinalStem => {
                return Err(GrammarError::InvalidSequence {
                    prev: prev_surface,
                    word: token.surface.clone(),
                });
            }
        }
    }

    Ok(acc.total + acc.group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::get_lexicon;
    use crate::tokenizer::tokenize;

    fn parse(text: &str) -> Result<i64, GrammarError> {
        let lexicon = get_lexicon("lb").unwrap();
        parse_cardinal(&tokenize(&lexicon, text).unwrap())
    }

    #[test]
    fn test_units_teens_tens() {
        assert_eq!(parse("null").unwrap(), 0);
        assert_eq!(parse("eent").unwrap(), 1);
        assert_eq!(parse("néng").unwrap(), 9);
        assert_eq!(parse("zéng").unwrap(), 10);
        assert_eq!(parse("nonnzéng").unwrap(), 19);
        assert_eq!(parse("foffzeg").unwrap(), 50);
    }

    #[test]
    fn test_inversion_is_a_dedicated_path() {
        assert_eq!(parse("véier a foffzeg").unwrap(), 54);
        assert_eq!(parse("véierafoffzeg").unwrap(), 54);
        assert_eq!(parse("eenanzwanzeg").unwrap(), 21);
        assert_eq!(parse("zweeavéierzeg").unwrap(), 42);
        assert_eq!(parse("nénganzwanzeg").unwrap(), 29);
        // Digit-then-tens with no connector
        assert_eq!(parse("véier foffzeg").unwrap(), 54);
    }

    #[test]
    fn test_alternative_spellings() {
        assert_eq!(parse("achtzéng").unwrap(), 18);
        assert_eq!(parse("uechtzéng").unwrap(), 18);
        assert_eq!(parse("eenhonnert zweeadräisseg").unwrap(), 132);
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(parse("honnert").unwrap(), 100);
        assert_eq!(parse("dräihonnert").unwrap(), 300);
        assert_eq!(parse("dräi-honnert").unwrap(), 300);
        assert_eq!(parse("honnertzwee").unwrap(), 102);
        assert_eq!(parse("eenhonnerteent").unwrap(), 101);
        assert_eq!(parse("eenhonnert zweeanzwanzeg").unwrap(), 122);
        assert_eq!(parse("nonnzénghonnert").unwrap(), 1900);
    }

    #[test]
    fn test_scales() {
        assert_eq!(parse("dausend").unwrap(), 1000);
        assert_eq!(parse("eendausend").unwrap(), 1000);
        assert_eq!(parse("millioun").unwrap(), 1_000_000);
        assert_eq!(parse("eng millioun").unwrap(), 1_000_000);
        assert_eq!(parse("eng millioun eent").unwrap(), 1_000_001);
        assert_eq!(parse("zwee milliounen").unwrap(), 2_000_000);
        assert_eq!(parse("milliard").unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_compound_phrases() {
        assert_eq!(parse("zwee dausend dräihonnert véierafoffzeg").unwrap(), 2354);
        assert_eq!(parse("eng millioun fënnefhonnert dausend").unwrap(), 1_500_000);
        assert_eq!(parse("dräi milliounen zweehonnert dausend").unwrap(), 3_200_000);
        assert_eq!(parse("véierandrësseg dausend").unwrap(), 34_000);
        assert_eq!(parse("véierdausendvéierafoffzeg").unwrap(), 4054);
        assert_eq!(parse("véier-dausend-véier-a-foffzeg").unwrap(), 4054);
        assert_eq!(parse("nonnzénghonnertnénganzwanzeg").unwrap(), 1929);
    }

    #[test]
    fn test_conjunctive_connector_after_scale() {
        assert_eq!(parse("dräi dausend an eenhonnert zwanzeg").unwrap(), 3120);
    }

    #[test]
    fn test_dangling_connector() {
        assert!(matches!(
            parse("véier an"),
            Err(GrammarError::DanglingConnector { .. })
        ));
        assert!(matches!(
            parse("an zwanzeg"),
            Err(GrammarError::DanglingConnector { .. })
        ));
    }

    #[test]
    fn test_illegal_scale_repetition() {
        assert!(matches!(
            parse("dausend dausend"),
            Err(GrammarError::ScaleOutOfOrder { .. })
        ));
        assert!(matches!(
            parse("honnert honnert"),
            Err(GrammarError::ScaleOutOfOrder { .. })
        ));
        assert!(matches!(
            parse("dausend millioun"),
            Err(GrammarError::ScaleOutOfOrder { .. })
        ));
    }

    #[test]
    fn test_invalid_sequences() {
        assert!(matches!(
            parse("véier dräi"),
            Err(GrammarError::InvalidSequence { .. })
        ));
        assert!(matches!(
            parse("zéng dräizéng"),
            Err(GrammarError::InvalidSequence { .. })
        ));
        assert!(matches!(
            parse("néng null"),
            Err(GrammarError::MisplacedZero { .. })
        ));
        assert!(matches!(
            parse("salut"),
            Err(GrammarError::UnknownWord { .. })
        ));
    }
}
