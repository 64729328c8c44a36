// Base translator - US -> UK word-level spelling substitution

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::LexiconError;
use crate::casing::match_case;

const BUNDLED_US_TO_UK: &str = include_str!("../../resources/us_to_uk.json");

/// Letters, optionally joined by internal apostrophes ("color", "color's")
pub(crate) fn re_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{L}+(?:'\p{L}+)*").expect("word pattern is valid"))
}

/// US -> UK spelling translation, treated as a black box by the converter
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Translator backed by a table of US -> UK word pairs
#[derive(Debug, Clone, Default)]
pub struct WordMapTranslator {
    /// Lowercased US spelling -> UK spelling
    words: HashMap<String, String>,
}

impl WordMapTranslator {
    /// Build from (us, uk) pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            words: pairs
                .into_iter()
                .map(|(us, uk)| (us.trim().to_lowercase(), uk))
                .filter(|(us, _)| !us.is_empty())
                .collect(),
        }
    }

    /// Parse a JSON object of `{"us": "uk"}` pairs
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let pairs: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| LexiconError::ParseError(e.to_string()))?;
        Ok(Self::from_pairs(pairs))
    }

    /// Load a JSON translation table from disk
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        crate::debug!("Loading translation table from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| LexiconError::LoadError(format!("{}: {}", path.display(), e)))?;
        let translator = Self::from_json(&content)
            .map_err(|e| LexiconError::ParseError(format!("{}: {}", path.display(), e)))?;
        crate::info!("Loaded {} translations from {:?}", translator.len(), path);
        Ok(translator)
    }

    /// Bundled US -> UK table
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_json(BUNDLED_US_TO_UK)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<String> {
        if let Some(uk) = self.words.get(&word.to_lowercase()) {
            return Some(match_case(word, uk));
        }
        // Possessives and contractions: translate the stem, keep the tail ("color's")
        let (stem, tail) = word.split_at(word.find('\'')?);
        let uk = self.words.get(&stem.to_lowercase())?;
        Some(format!("{}{}", match_case(stem, uk), tail))
    }
}

impl Translator for WordMapTranslator {
    fn translate(&self, text: &str) -> String {
        if self.words.is_empty() {
            return text.to_string();
        }
        re_word()
            .replace_all(text, |caps: &Captures| {
                let word = &caps[0];
                self.lookup(word).unwrap_or_else(|| word.to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
#[path = "translator_test.rs"]
mod tests;
