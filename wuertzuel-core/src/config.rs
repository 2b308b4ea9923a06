//! Lexicon configuration schema and validation
//!
//! This module defines the TOML schema for a language lexicon.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub cardinal: Cardinal,
    pub connector: Connector,
    pub decimal: Decimal,
    pub ordinal: Ordinal,
    pub months: HashMap<String, Vec<String>>,
    pub n_rule: NRuleClasses,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Cardinal number vocabulary, keyed by numeric value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cardinal {
    pub units: HashMap<String, Vec<String>>,
    pub teens: HashMap<String, Vec<String>>,
    pub tens: HashMap<String, Vec<String>>,
    pub scales: HashMap<String, Vec<String>>,
}

/// Connector particle configuration ("an"/"a")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub forms: Vec<String>,
}

/// Decimal marker configuration ("komma"/"punkt")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decimal {
    pub marks: Vec<String>,
}

/// Ordinal configuration: irregular stems plus the productive suffix rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ordinal {
    /// Irregular stems keyed by base cardinal value
    pub stems: HashMap<String, Vec<String>>,
    /// Suffix of the regular productive pattern for ordinals >= 20
    pub regular_suffix: String,
    /// Observable inflections after a stem ("en" keeps the n, "e" drops it)
    pub inflections: Vec<String>,
}

/// Character classes for the phonological n-rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NRuleClasses {
    pub vowels: Vec<char>,
    pub retained_consonants: Vec<char>,
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("lexicon code must not be empty".to_string());
        }

        for (section, table, range) in [
            ("cardinal.units", &self.cardinal.units, 0..=9),
            ("cardinal.teens", &self.cardinal.teens, 10..=19),
            ("cardinal.tens", &self.cardinal.tens, 20..=90),
            ("cardinal.scales", &self.cardinal.scales, 100..=i64::MAX),
            ("ordinal.stems", &self.ordinal.stems, 1..=19),
            ("months", &self.months, 1..=12),
        ] {
            if table.is_empty() {
                return Err(format!("{section} must not be empty"));
            }
            for (key, forms) in table {
                let value: i64 = key
                    .parse()
                    .map_err(|_| format!("{section} key '{key}' is not numeric"))?;
                if !range.contains(&value) {
                    return Err(format!("{section} key '{key}' out of range"));
                }
                if forms.is_empty() {
                    return Err(format!("{section} entry '{key}' has no surface forms"));
                }
            }
        }

        if self.connector.forms.is_empty() {
            return Err("connector forms must not be empty".to_string());
        }
        if self.decimal.marks.is_empty() {
            return Err("decimal marks must not be empty".to_string());
        }
        if self.ordinal.regular_suffix.is_empty() {
            return Err("ordinal regular_suffix must not be empty".to_string());
        }
        if self.ordinal.inflections.is_empty() {
            return Err("ordinal inflections must not be empty".to_string());
        }
        if self.n_rule.vowels.is_empty() {
            return Err("n_rule vowels must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_config() -> LexiconConfig {
        toml::from_str(include_str!("../configs/languages/lb.toml"))
            .expect("embedded lexicon must parse")
    }

    #[test]
    fn test_embedded_config_parses_and_validates() {
        let config = embedded_config();
        assert_eq!(config.metadata.code, "lb");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_month_range_is_checked() {
        let mut config = embedded_config();
        config
            .months
            .insert("13".to_string(), vec!["undertober".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_numeric_key_is_rejected() {
        let mut config = embedded_config();
        config
            .cardinal
            .units
            .insert("zwou".to_string(), vec!["zwou".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_forms_are_rejected() {
        let mut config = embedded_config();
        config.cardinal.tens.insert("20".to_string(), vec![]);
        assert!(config.validate().is_err());
    }
}
