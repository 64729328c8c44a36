// Resource loading - builds the converter and stores from configuration
// Runs once at startup; every failure here is an initialization error

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::{Engine, InitError};
use crate::config::Config;
use crate::converter::Converter;
use crate::lexicon::{WordList, WordMapTranslator};
use crate::mapping::{CorrectionStore, CustomMappings, MappingTable};

const BUNDLED_PHRASES: &str = include_str!("../../resources/phrases.json");
const BUNDLED_EXCEPTIONS: &str = include_str!("../../resources/exceptions.json");

/// Load a phrase table from `path`, or parse the bundled JSON
fn load_table(path: Option<&Path>, bundled: &str, name: &str) -> Result<MappingTable, InitError> {
    let (content, source) = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                InitError::MappingLoad(format!("{} {}: {}", name, path.display(), e))
            })?;
            (content, path.display().to_string())
        }
        None => (bundled.to_string(), "bundled".to_string()),
    };

    let table = MappingTable::from_json(&content)
        .map_err(|e| InitError::MappingLoad(format!("{} {}: {}", name, source, e)))?;
    crate::info!("Loaded {} {} entries ({})", table.len(), name, source);
    Ok(table)
}

fn load_word_list(path: Option<&Path>, bundled: fn() -> WordList) -> Result<WordList, InitError> {
    match path {
        Some(path) => Ok(WordList::load(path)?),
        None => Ok(bundled()),
    }
}

/// Build a converter from configured (or bundled) resources, without override stores
pub fn load_converter(config: &Config) -> Result<Converter, InitError> {
    let us = load_word_list(config.us_dictionary.as_deref(), WordList::bundled_us)?;
    let gb = load_word_list(config.gb_dictionary.as_deref(), WordList::bundled_gb_ise)?;
    crate::debug!("Dictionaries ready: {} US words, {} GB words", us.len(), gb.len());

    let translator = match config.translations.as_deref() {
        Some(path) => WordMapTranslator::load(path)?,
        None => WordMapTranslator::bundled()?,
    };

    let phrase_map = load_table(config.phrase_map.as_deref(), BUNDLED_PHRASES, "phrase map")?;
    let exceptions = load_table(config.exceptions.as_deref(), BUNDLED_EXCEPTIONS, "exceptions")?;

    Ok(Converter::new(Arc::new(translator), Arc::new(us), Arc::new(gb))
        .with_phrase_map(phrase_map)
        .with_exceptions(exceptions))
}

/// Build the full engine: converter, persisted corrections and memory-only custom mappings
pub fn load_engine(config: &Config) -> Result<Engine, InitError> {
    let corrections = Arc::new(CorrectionStore::open(config.corrections_path()?)?);
    let custom_mappings = Arc::new(CustomMappings::new());

    let converter = load_converter(config)?
        .with_mapping_store(corrections.clone())
        .with_mapping_store(custom_mappings.clone());

    Ok(Engine {
        converter,
        corrections,
        custom_mappings,
    })
}
