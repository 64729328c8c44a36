// Mapping table - phrase substitution with case preservation
// Uses case-insensitive, whole-phrase matching with regex, longest phrase first

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::casing::{match_case, match_phrase_case};

/// A single phrase -> replacement pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingEntry {
    /// Phrase to match (single word or multi-word, matched case-insensitively)
    pub phrase: String,
    /// Text substituted for the phrase, re-cased from the matched span
    pub replacement: String,
}

/// Compiled pattern for a single mapping entry
#[derive(Debug, Clone)]
struct CompiledPattern {
    regex: Regex,
    replacement: String,
}

/// Immutable, ordered phrase table with pre-compiled patterns.
///
/// Keys are unique case-insensitively; inserting a duplicate phrase replaces
/// the earlier replacement in place. Tables are never mutated after
/// construction, so a table can be shared across threads as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    /// Entries in insertion order
    entries: Vec<MappingEntry>,
    /// Lowercased phrase -> position in `entries`
    index: HashMap<String, usize>,
    /// Patterns in application order (longest phrase first)
    patterns: Vec<CompiledPattern>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (phrase, replacement) pairs.
    /// Phrases are trimmed; empty phrases are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<MappingEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (phrase, replacement) in pairs {
            let phrase = phrase.into().trim().to_string();
            if phrase.is_empty() {
                continue;
            }
            let replacement = replacement.into();
            match index.get(&phrase.to_lowercase()) {
                Some(&position) => entries[position].replacement = replacement,
                None => {
                    index.insert(phrase.to_lowercase(), entries.len());
                    entries.push(MappingEntry {
                        phrase,
                        replacement,
                    });
                }
            }
        }
        Self::from_entries(entries, index)
    }

    /// Parse a JSON object of `{"phrase": "replacement"}` pairs
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut pairs = Vec::with_capacity(map.len());
        for (phrase, value) in map {
            match value {
                serde_json::Value::String(replacement) => pairs.push((phrase, replacement)),
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "replacement for '{}' must be a string, got {}",
                        phrase, other
                    )))
                }
            }
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Merge tables into one. On duplicate phrases the later table wins.
    pub fn merged(tables: &[&MappingTable]) -> Self {
        Self::from_pairs(tables.iter().flat_map(|table| {
            table
                .entries
                .iter()
                .map(|e| (e.phrase.clone(), e.replacement.clone()))
        }))
    }

    fn from_entries(entries: Vec<MappingEntry>, index: HashMap<String, usize>) -> Self {
        let mut ordered: Vec<&MappingEntry> = entries.iter().collect();
        // Stable sort: equal-length phrases keep insertion order
        ordered.sort_by(|a, b| b.phrase.chars().count().cmp(&a.phrase.chars().count()));

        let patterns = ordered
            .into_iter()
            .filter_map(|entry| match Regex::new(&phrase_pattern(&entry.phrase)) {
                Ok(regex) => Some(CompiledPattern {
                    regex,
                    replacement: entry.replacement.clone(),
                }),
                Err(e) => {
                    crate::warn!(
                        "Failed to compile pattern for phrase '{}': {}",
                        entry.phrase,
                        e
                    );
                    None
                }
            })
            .collect();

        Self {
            entries,
            index,
            patterns,
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Look up the replacement for a phrase (case-insensitive)
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(&phrase.trim().to_lowercase())
            .map(|&position| self.entries[position].replacement.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry to `text`, re-casing each replacement from its match.
    ///
    /// Entries run longest phrase first, one after another over the mutating
    /// buffer, so a later entry can match text produced by an earlier one.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, |_, recased| recased)
    }

    /// Like [`apply`](Self::apply), but the re-cased replacement is passed
    /// through `emit` together with the matched span before it is inserted.
    pub fn apply_with<F>(&self, text: &str, mut emit: F) -> String
    where
        F: FnMut(&str, String) -> String,
    {
        let mut result = text.to_string();

        for pattern in &self.patterns {
            if !pattern.regex.is_match(&result) {
                continue;
            }
            // Closure replacement: `$` in the replacement is never read as a group reference
            result = pattern
                .regex
                .replace_all(&result, |caps: &Captures| {
                    let source = &caps[0];
                    emit(source, recase(source, &pattern.replacement))
                })
                .into_owned();
        }

        result
    }
}

/// Pick the case-preservation variant for a matched span
fn recase(source: &str, replacement: &str) -> String {
    if source.split_whitespace().nth(1).is_some() {
        match_phrase_case(source, replacement)
    } else {
        match_case(source, replacement)
    }
}

/// Build a case-insensitive, whole-phrase pattern.
/// Word boundaries are only asserted next to word characters, so phrases
/// like "e.g." still match; inner whitespace matches any whitespace run.
fn phrase_pattern(phrase: &str) -> String {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let is_word = |c: Option<char>| c.map_or(false, |c| c.is_alphanumeric() || c == '_');
    let start = if is_word(phrase.chars().next()) { r"\b" } else { "" };
    let end = if is_word(phrase.chars().last()) { r"\b" } else { "" };
    format!(r"(?i){}{}{}", start, body, end)
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
