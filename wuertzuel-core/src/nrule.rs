//! Phonological n-rule engine
//!
//! Luxembourgish drops a word-final "-n" unless the following word starts
//! with a vowel or one of a small set of consonants. The rule governs
//! orthography only; ordinal values never depend on it.

use std::collections::HashSet;

/// Whether a word-final "-n" is kept or dropped before the following word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// The "-n" stays ("éischten Abrëll")
    Kept,
    /// The "-n" is dropped ("éischte Februar")
    Dropped,
}

/// First-phoneme classifier for the n-rule
///
/// Character classes are data-driven from the lexicon configuration.
#[derive(Debug, Clone)]
pub struct NRule {
    vowels: HashSet<char>,
    retained_consonants: HashSet<char>,
}

impl NRule {
    /// Build from the configured character classes
    pub fn new(vowels: &[char], retained_consonants: &[char]) -> Self {
        Self {
            vowels: vowels.iter().copied().collect(),
            retained_consonants: retained_consonants.iter().copied().collect(),
        }
    }

    /// Classify the initial sound of `following` - case-insensitive
    #[inline]
    pub fn expected_suffix(&self, following: &str) -> Suffix {
        let Some(first) = following.chars().next() else {
            return Suffix::Dropped;
        };
        let first = first.to_lowercase().next().unwrap_or(first);
        if self.vowels.contains(&first) || self.retained_consonants.contains(&first) {
            Suffix::Kept
        } else {
            Suffix::Dropped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> NRule {
        NRule::new(
            &['a', 'e', 'i', 'o', 'u', 'ä', 'ë', 'é', 'ê', 'è'],
            &['h', 'n', 'd', 'z', 't', 'r'],
        )
    }

    #[test]
    fn test_vowel_initial_keeps_n() {
        assert_eq!(rule().expected_suffix("Abrëll"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("august"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("Oktober"), Suffix::Kept);
    }

    #[test]
    fn test_retained_consonants_keep_n() {
        assert_eq!(rule().expected_suffix("Dezember"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("November"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("Tour"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("Rees"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("Hond"), Suffix::Kept);
        assert_eq!(rule().expected_suffix("Zuch"), Suffix::Kept);
    }

    #[test]
    fn test_other_consonants_drop_n() {
        assert_eq!(rule().expected_suffix("Februar"), Suffix::Dropped);
        assert_eq!(rule().expected_suffix("Mäerz"), Suffix::Dropped);
        assert_eq!(rule().expected_suffix("Juli"), Suffix::Dropped);
        assert_eq!(rule().expected_suffix("september"), Suffix::Dropped);
    }

    #[test]
    fn test_empty_following_word_drops_n() {
        assert_eq!(rule().expected_suffix(""), Suffix::Dropped);
    }
}
