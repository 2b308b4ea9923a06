//! Runtime lexicon tables
//!
//! The validated TOML configuration is compiled once into hash-map lookup
//! tables plus a compound trie. The result is immutable and shared behind
//! an `Arc`; every parse operation performs pure reads against it.

pub mod loader;
pub mod trie;

use std::collections::HashMap;

use crate::config::LexiconConfig;
use crate::nrule::NRule;
use trie::CompoundTrie;

pub use loader::get_lexicon;

/// Semantic role of a surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Digit 0-9 ("véier")
    Unit,
    /// 10-19, irregular stems ("nonnzéng")
    Teen,
    /// Decade word 20-90 ("foffzeg")
    Ten,
    /// Power-of-ten grouping word ("honnert", "dausend", "millioun")
    Scale,
    /// The particle "a"/"an" linking a unit and a ten
    Connector,
    /// Decimal marker ("komma", "punkt")
    DecimalMark,
    /// Irregular ordinal stem ("éischt")
    OrdinalStem,
    /// Month name or abbreviation
    Month,
    /// Not in the lexicon; callers decide whether this aborts the parse
    Unknown,
}

/// One lexicon entry: role tag plus numeric payload
///
/// `value` is meaningful for Unit/Teen/Ten/Scale/Month/OrdinalStem and
/// zero for Connector/DecimalMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalEntry {
    pub role: Role,
    pub value: i64,
}

/// Compiled lexicon for one locale
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    /// Cardinal vocabulary, connectors, decimal marks and months
    entries: HashMap<String, LexicalEntry>,
    /// Irregular ordinal stems, kept apart from `entries` because stems
    /// like "aacht" collide with their cardinal homographs
    ordinal_stems: HashMap<String, i64>,
    /// Trie over cardinal and connector surfaces for fused compounds
    compounds: CompoundTrie,
    n_rule: NRule,
    ordinal_suffix: String,
    inflections: Vec<String>,
}

impl Lexicon {
    /// Compile a validated configuration into runtime tables
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let mut entries = HashMap::new();
        let mut compounds = CompoundTrie::new();

        fn add(
            entries: &mut HashMap<String, LexicalEntry>,
            section: &str,
            form: &str,
            entry: LexicalEntry,
        ) -> Result<(), String> {
            let form = form.to_lowercase();
            if entries.insert(form.clone(), entry).is_some() {
                return Err(format!("duplicate surface form '{form}' in {section}"));
            }
            Ok(())
        }

        for (section, table, role) in [
            ("cardinal.units", &config.cardinal.units, Role::Unit),
            ("cardinal.teens", &config.cardinal.teens, Role::Teen),
            ("cardinal.tens", &config.cardinal.tens, Role::Ten),
            ("cardinal.scales", &config.cardinal.scales, Role::Scale),
        ] {
            for (key, forms) in table {
                let value: i64 = key
                    .parse()
                    .map_err(|_| format!("{section} key '{key}' is not numeric"))?;
                for form in forms {
                    add(&mut entries, section, form, LexicalEntry { role, value })?;
                    // Zero never occurs inside a fused compound
                    if value != 0 {
                        compounds.insert(&form.to_lowercase());
                    }
                }
            }
        }

        for form in &config.connector.forms {
            add(
                &mut entries,
                "connector",
                form,
                LexicalEntry {
                    role: Role::Connector,
                    value: 0,
                },
            )?;
            compounds.insert(&form.to_lowercase());
        }

        for form in &config.decimal.marks {
            add(
                &mut entries,
                "decimal",
                form,
                LexicalEntry {
                    role: Role::DecimalMark,
                    value: 0,
                },
            )?;
        }

        for (key, forms) in &config.months {
            let value: i64 = key
                .parse()
                .map_err(|_| format!("month key '{key}' is not numeric"))?;
            for form in forms {
                add(
                    &mut entries,
                    "months",
                    form,
                    LexicalEntry {
                        role: Role::Month,
                        value,
                    },
                )?;
            }
        }

        let mut ordinal_stems = HashMap::new();
        for (key, forms) in &config.ordinal.stems {
            let value: i64 = key
                .parse()
                .map_err(|_| format!("ordinal stem key '{key}' is not numeric"))?;
            for form in forms {
                let form = form.to_lowercase();
                if ordinal_stems.insert(form.clone(), value).is_some() {
                    return Err(format!("duplicate ordinal stem '{form}'"));
                }
            }
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            entries,
            ordinal_stems,
            compounds,
            n_rule: NRule::new(&config.n_rule.vowels, &config.n_rule.retained_consonants),
            ordinal_suffix: config.ordinal.regular_suffix.clone(),
            inflections: config.ordinal.inflections.clone(),
        })
    }

    /// Case-insensitive, diacritic-exact lookup
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<LexicalEntry> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    /// Month lookup; tolerates a trailing period on abbreviations ("jan.")
    pub fn month(&self, word: &str) -> Option<LexicalEntry> {
        let trimmed = word.trim_end_matches('.');
        self.lookup(trimmed).filter(|e| e.role == Role::Month)
    }

    /// Irregular ordinal stem lookup, base cardinal value
    #[inline]
    pub fn ordinal_stem(&self, stem: &str) -> Option<i64> {
        self.ordinal_stems.get(&stem.to_lowercase()).copied()
    }

    /// Greedy longest-match decomposition of a fused compound
    pub fn decompose(&self, word: &str) -> Option<Vec<String>> {
        self.compounds.decompose(&word.to_lowercase())
    }

    /// The phonological n-rule for this locale
    pub fn n_rule(&self) -> &NRule {
        &self.n_rule
    }

    /// Suffix of the regular productive ordinal pattern ("st")
    pub fn ordinal_suffix(&self) -> &str {
        &self.ordinal_suffix
    }

    /// Observable ordinal inflections ("en", "e")
    pub fn inflections(&self) -> &[String] {
        &self.inflections
    }

    /// Whether `word` is a detached ordinal inflection token
    pub fn is_inflection(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.inflections.iter().any(|i| *i == lowered)
    }

    /// Locale code ("lb")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable locale name
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> std::sync::Arc<Lexicon> {
        loader::get_lexicon("lb").expect("embedded lexicon must load")
    }

    #[test]
    fn test_lookup_roles_and_values() {
        let lex = lexicon();
        assert_eq!(
            lex.lookup("véier"),
            Some(LexicalEntry {
                role: Role::Unit,
                value: 4
            })
        );
        assert_eq!(
            lex.lookup("nonnzéng"),
            Some(LexicalEntry {
                role: Role::Teen,
                value: 19
            })
        );
        assert_eq!(
            lex.lookup("foffzeg"),
            Some(LexicalEntry {
                role: Role::Ten,
                value: 50
            })
        );
        assert_eq!(
            lex.lookup("millioun"),
            Some(LexicalEntry {
                role: Role::Scale,
                value: 1_000_000
            })
        );
        assert_eq!(lex.lookup("komma").map(|e| e.role), Some(Role::DecimalMark));
        assert_eq!(lex.lookup("an").map(|e| e.role), Some(Role::Connector));
    }

    #[test]
    fn test_lookup_is_case_insensitive_but_diacritic_exact() {
        let lex = lexicon();
        assert!(lex.lookup("Véier").is_some());
        assert!(lex.lookup("DRÄI").is_some());
        // ASCII-folded spelling is a different word
        assert!(lex.lookup("veier").is_none());
    }

    #[test]
    fn test_month_lookup_with_abbreviation() {
        let lex = lexicon();
        assert_eq!(lex.month("Abrëll").map(|e| e.value), Some(4));
        assert_eq!(lex.month("dez").map(|e| e.value), Some(12));
        assert_eq!(lex.month("jan.").map(|e| e.value), Some(1));
        assert!(lex.month("véier").is_none());
    }

    #[test]
    fn test_ordinal_stems_are_separate_from_cardinals() {
        let lex = lexicon();
        // "aacht" is both the cardinal 8 and the ordinal stem of "aachten"
        assert_eq!(lex.lookup("aacht").map(|e| e.value), Some(8));
        assert_eq!(lex.ordinal_stem("aacht"), Some(8));
        assert_eq!(lex.ordinal_stem("éischt"), Some(1));
        assert_eq!(lex.ordinal_stem("véier"), None);
    }

    #[test]
    fn test_decompose_uses_cardinal_vocabulary() {
        let lex = lexicon();
        assert_eq!(
            lex.decompose("Dräihonnert"),
            Some(vec!["dräi".to_string(), "honnert".to_string()])
        );
        // Months never take part in compounds
        assert_eq!(lex.decompose("véierjanuar"), None);
    }
}
