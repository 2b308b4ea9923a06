//! Embedded lexicon loader
//!
//! Manages embedded lexicons with per-locale caching. Lexicons are parsed
//! once on first access and shared read-only across threads.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::LexiconConfig;
use crate::error::ParseError;
use crate::lexicon::Lexicon;

/// Embedded lexicons, keyed by locale tag
static EMBEDDED: OnceLock<HashMap<String, Arc<Lexicon>>> = OnceLock::new();

/// Load a lexicon by locale tag
///
/// Accepts the bare language code plus its regional aliases; an unknown
/// tag falls back to its two-letter prefix before failing.
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>, ParseError> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded("lb", include_str!("../../configs/languages/lb.toml")) {
            Ok(lexicon) => {
                map.insert("lb".to_string(), Arc::clone(&lexicon));
                map.insert("lb_LU".to_string(), Arc::clone(&lexicon));
                map.insert("lb-LU".to_string(), lexicon);
            }
            Err(e) => {
                eprintln!("warning: failed to load Luxembourgish lexicon: {e}");
            }
        }

        map
    });

    if let Some(lexicon) = embedded.get(code) {
        return Ok(Arc::clone(lexicon));
    }

    // "lb_XY" style tags fall back to the bare language code
    if let Some(prefix) = code.get(..2) {
        if prefix != code {
            if let Some(lexicon) = embedded.get(prefix) {
                return Ok(Arc::clone(lexicon));
            }
        }
    }

    Err(ParseError::UnsupportedLocale {
        code: code.to_string(),
    })
}

/// Parse and compile one embedded TOML lexicon
fn load_embedded(code: &str, toml_str: &str) -> Result<Arc<Lexicon>, String> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| format!("failed to parse {code} lexicon: {e}"))?;
    let lexicon = Lexicon::from_config(&config)?;
    Ok(Arc::new(lexicon))
}
