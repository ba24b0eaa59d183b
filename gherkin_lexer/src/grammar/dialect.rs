//! Keyword dialects
//!
//! A dialect is the full set of localized keywords for one language. The
//! built-in table is embedded at compile time and parsed once on first use.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const BUILTIN_DIALECTS: &str = include_str!("gherkin-languages.json");

static BUILTIN_TABLE: OnceLock<DialectTable> = OnceLock::new();

/// Localized keyword lists for one language.
///
/// Keyword order matters: matchers try keywords in list order and take the
/// first one that fits. Step keywords carry their trailing space when the
/// language separates words with spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialect {
    pub name: String,
    pub native: String,
    pub feature: Vec<String>,
    pub background: Vec<String>,
    pub scenario: Vec<String>,
    pub scenario_outline: Vec<String>,
    pub examples: Vec<String>,
    pub given: Vec<String>,
    pub when: Vec<String>,
    pub then: Vec<String>,
    pub and: Vec<String>,
    pub but: Vec<String>,
    pub rule: Vec<String>,
}

impl Dialect {
    /// Step keywords in matching order: given, when, then, and, but
    pub fn step_keywords(&self) -> impl Iterator<Item = &str> {
        self.given
            .iter()
            .chain(&self.when)
            .chain(&self.then)
            .chain(&self.and)
            .chain(&self.but)
            .map(String::as_str)
    }
}

/// Immutable mapping from language code to dialect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialectTable {
    dialects: HashMap<String, Dialect>,
}

impl DialectTable {
    /// The table shipped with the crate
    pub fn builtin() -> &'static DialectTable {
        BUILTIN_TABLE.get_or_init(|| Self::from_json(BUILTIN_DIALECTS).unwrap_or_default())
    }

    /// Parse a table in the `gherkin-languages.json` layout
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a table from explicit entries
    pub fn from_dialects<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Dialect)>,
        S: Into<String>,
    {
        Self {
            dialects: entries
                .into_iter()
                .map(|(code, dialect)| (code.into(), dialect))
                .collect(),
        }
    }

    pub fn get(&self, language: &str) -> Option<&Dialect> {
        self.dialects.get(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.dialects.contains_key(language)
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}
