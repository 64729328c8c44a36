// Converter - the full New Zealand English conversion pipeline
//
// normalize -> phrase map -> exceptions (shielded) -> protect $ -> translate -> restore $
//   -> -ize rewriter -> unshield exceptions -> corrections/custom mappings

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

use crate::lexicon::{Dictionary, Translator};
use crate::mapping::{MappingStore, MappingTable, Shield};
use crate::normalize::{normalize, protect};
use crate::suffix::apply_ise_conversions;
use crate::walker::walk;

/// Merged override table, tagged with the store generations it was built from
struct OverrideCache {
    generations: Vec<u64>,
    table: Arc<MappingTable>,
}

/// Converts American/British spelling to New Zealand English.
///
/// Dictionaries, translator and built-in tables are read-only; user override
/// stores are injected and read through snapshots at the start of each pass.
pub struct Converter {
    /// Built-in multi-word replacements, applied first
    phrase_map: MappingTable,
    /// Built-in words shielded from translation
    exceptions: MappingTable,
    translator: Arc<dyn Translator>,
    us_dictionary: Arc<dyn Dictionary>,
    gb_dictionary: Arc<dyn Dictionary>,
    /// User override stores, merged in order (later store wins on duplicate phrases)
    overrides: Vec<Arc<dyn MappingStore>>,
    override_cache: Mutex<Option<OverrideCache>>,
}

impl Converter {
    /// Create a converter with empty phrase tables and no override stores
    pub fn new(
        translator: Arc<dyn Translator>,
        us_dictionary: Arc<dyn Dictionary>,
        gb_dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        Self {
            phrase_map: MappingTable::new(),
            exceptions: MappingTable::new(),
            translator,
            us_dictionary,
            gb_dictionary,
            overrides: Vec::new(),
            override_cache: Mutex::new(None),
        }
    }

    /// Set the built-in phrase map (builder pattern)
    pub fn with_phrase_map(mut self, phrase_map: MappingTable) -> Self {
        self.phrase_map = phrase_map;
        self
    }

    /// Set the built-in exceptions map (builder pattern)
    pub fn with_exceptions(mut self, exceptions: MappingTable) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Add a user override store (builder pattern)
    pub fn with_mapping_store(mut self, store: Arc<dyn MappingStore>) -> Self {
        self.overrides.push(store);
        self
    }

    /// Convert a single piece of text
    pub fn convert(&self, text: &str) -> String {
        let overrides = self.override_table();

        let text = normalize(text);
        let text = self.phrase_map.apply(&text);

        let mut shield = Shield::new();
        let text = shield.apply(&self.exceptions, &text);

        let protected = protect(&text);
        let translated = self.translator.translate(protected.text());
        let text = protected.restore(&translated);

        let text = apply_ise_conversions(
            &text,
            self.us_dictionary.as_ref(),
            self.gb_dictionary.as_ref(),
        );
        let text = shield.restore(&text);

        overrides.apply(&text)
    }

    /// Convert every string leaf of a JSON value, leaving keys and other values intact
    pub fn convert_object(&self, value: &Value) -> Value {
        walk(value, &|text: &str| self.convert(text))
    }

    /// Merged snapshot of all override stores, rebuilt only when a store changed
    fn override_table(&self) -> Arc<MappingTable> {
        let snapshots: Vec<_> = self.overrides.iter().map(|store| store.snapshot()).collect();
        let generations: Vec<u64> = snapshots.iter().map(|s| s.generation).collect();

        let mut cache = self.override_cache.lock();
        if let Some(cached) = cache.as_ref() {
            if cached.generations == generations {
                return Arc::clone(&cached.table);
            }
        }

        let tables: Vec<&MappingTable> = snapshots.iter().map(|s| s.table.as_ref()).collect();
        let table = Arc::new(MappingTable::merged(&tables));
        crate::debug!("Rebuilt override table with {} entries", table.len());
        *cache = Some(OverrideCache {
            generations,
            table: Arc::clone(&table),
        });
        table
    }
}

#[cfg(test)]
#[path = "converter_test.rs"]
mod tests;
