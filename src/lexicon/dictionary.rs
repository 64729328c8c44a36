// Word dictionaries - case-insensitive membership sets for one English variety

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::LexiconError;

const BUNDLED_US: &str = include_str!("../../resources/us_words.txt");
const BUNDLED_GB_ISE: &str = include_str!("../../resources/gb_ise_words.txt");

/// Case-insensitive word membership, as consumed by the -ize rewriter
pub trait Dictionary: Send + Sync {
    /// True if `word` is a valid word in this variety, ignoring case
    fn contains(&self, word: &str) -> bool;
}

/// In-memory word list, stored lowercased
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parse a word list.
    ///
    /// Accepts plain lists (one word per line) and hunspell `.dic` files:
    /// blank lines and `#` comments are skipped, a leading numeric count line
    /// is ignored, and anything from `/` (affix flags) or the first
    /// whitespace (morphological fields) onwards is dropped.
    pub fn parse(content: &str) -> Self {
        let mut words = HashSet::new();
        let mut seen_entry = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !seen_entry && line.chars().all(|c| c.is_ascii_digit()) {
                seen_entry = true;
                continue;
            }
            seen_entry = true;

            let word = line
                .split(|c: char| c == '/' || c.is_whitespace())
                .next()
                .unwrap_or_default();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }

        Self { words }
    }

    /// Load a word list from disk
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        crate::debug!("Loading word list from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| LexiconError::LoadError(format!("{}: {}", path.display(), e)))?;
        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(LexiconError::Empty(path.display().to_string()));
        }
        crate::info!("Loaded {} words from {:?}", list.len(), path);
        Ok(list)
    }

    /// Bundled US English list
    pub fn bundled_us() -> Self {
        Self::parse(BUNDLED_US)
    }

    /// Bundled British English (-ise) list
    pub fn bundled_gb_ise() -> Self {
        Self::parse(BUNDLED_GB_ISE)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
