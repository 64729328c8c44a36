//! Word-level language resources for the conversion pipeline.
//!
//! - `dictionary`: the `Dictionary` trait and the `WordList` implementation
//! - `translator`: the `Translator` trait and the table-backed US -> UK translator

mod dictionary;
mod translator;

pub use dictionary::{Dictionary, WordList};
pub(crate) use translator::re_word;
pub use translator::{Translator, WordMapTranslator};

/// Error types for loading lexicon resources
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    /// Resource could not be read
    #[error("Failed to load lexicon resource: {0}")]
    LoadError(String),
    /// Resource was read but is malformed
    #[error("Failed to parse lexicon resource: {0}")]
    ParseError(String),
    /// Word list contained no words
    #[error("Word list {0} contains no words")]
    Empty(String),
}
