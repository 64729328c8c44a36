// Mapping stores - runtime-mutable correction and custom mapping tables
// Follows the dictionary store pattern: JSON file persistence with atomic temp file + rename
//
// Readers take an Arc snapshot; writers are serialized and swap in a freshly built table,
// so a conversion in flight never observes a half-applied update.

use parking_lot::{Mutex, RwLock};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::table::{MappingEntry, MappingTable};

/// Error types for mapping store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Phrase is empty or whitespace
    #[error("Phrase cannot be empty")]
    EmptyPhrase,
    /// Phrase not present in the store
    #[error("Mapping for '{0}' not found")]
    NotFound(String),
    /// Failed to persist the table; the in-memory update was still applied
    #[error("Failed to persist mappings: {0}")]
    PersistenceError(String),
    /// Failed to load the table
    #[error("Failed to load mappings: {0}")]
    LoadError(String),
}

/// A consistent, immutable view of a store's table
#[derive(Debug, Clone)]
pub struct MappingSnapshot {
    /// Incremented on every mutation of the owning store
    pub generation: u64,
    pub table: Arc<MappingTable>,
}

/// Read access to a mutable mapping table, as consumed by the converter
pub trait MappingStore: Send + Sync {
    /// Current table; stays valid for the whole conversion pass
    fn snapshot(&self) -> MappingSnapshot;
}

/// Copy-on-write table shared by both store variants
#[derive(Debug)]
struct CowTable {
    current: RwLock<MappingSnapshot>,
    /// Single-writer lock, held across rebuild and persistence
    writer: Mutex<()>,
}

impl CowTable {
    fn new(table: MappingTable) -> Self {
        Self {
            current: RwLock::new(MappingSnapshot {
                generation: 0,
                table: Arc::new(table),
            }),
            writer: Mutex::new(()),
        }
    }

    fn snapshot(&self) -> MappingSnapshot {
        self.current.read().clone()
    }

    /// Build a new table from the current entries and swap it in.
    /// Must be called with the writer lock held.
    fn replace(&self, entries: Vec<(String, String)>) -> Arc<MappingTable> {
        let table = Arc::new(MappingTable::from_pairs(entries));
        let mut current = self.current.write();
        current.generation += 1;
        current.table = Arc::clone(&table);
        table
    }
}

fn current_pairs(table: &MappingTable) -> Vec<(String, String)> {
    table
        .entries()
        .iter()
        .map(|e| (e.phrase.clone(), e.replacement.clone()))
        .collect()
}

fn validate_pairs<I>(pairs: I) -> Result<Vec<(String, String)>, StoreError>
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs
        .into_iter()
        .map(|(phrase, replacement)| {
            let phrase = phrase.trim().to_string();
            if phrase.is_empty() {
                Err(StoreError::EmptyPhrase)
            } else {
                Ok((phrase, replacement))
            }
        })
        .collect()
}

fn without_phrase(
    table: &MappingTable,
    phrase: &str,
) -> Result<Vec<(String, String)>, StoreError> {
    let wanted = phrase.trim().to_lowercase();
    let pairs = current_pairs(table);
    let before = pairs.len();
    let remaining: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(p, _)| p.to_lowercase() != wanted)
        .collect();
    if remaining.len() == before {
        return Err(StoreError::NotFound(phrase.trim().to_string()));
    }
    Ok(remaining)
}

/// Memory-only custom mappings, reset on restart
#[derive(Debug)]
pub struct CustomMappings {
    inner: CowTable,
}

impl Default for CustomMappings {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomMappings {
    pub fn new() -> Self {
        Self {
            inner: CowTable::new(MappingTable::new()),
        }
    }

    /// All entries in insertion order
    pub fn list(&self) -> Vec<MappingEntry> {
        self.inner.snapshot().table.entries().to_vec()
    }

    /// Add or overwrite mappings. Returns the number of pairs applied.
    #[must_use = "this returns a Result that should be handled"]
    pub fn add<I>(&self, pairs: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let pairs = validate_pairs(pairs)?;
        let count = pairs.len();
        let _writer = self.inner.writer.lock();
        let mut entries = current_pairs(&self.inner.snapshot().table);
        entries.extend(pairs);
        self.inner.replace(entries);
        crate::debug!("Added {} custom mapping(s)", count);
        Ok(count)
    }

    /// Remove a mapping by phrase (case-insensitive)
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(&self, phrase: &str) -> Result<(), StoreError> {
        let _writer = self.inner.writer.lock();
        let remaining = without_phrase(&self.inner.snapshot().table, phrase)?;
        self.inner.replace(remaining);
        crate::debug!("Removed custom mapping '{}'", phrase.trim());
        Ok(())
    }

    /// Remove every mapping
    pub fn clear(&self) {
        let _writer = self.inner.writer.lock();
        self.inner.replace(Vec::new());
        crate::debug!("Cleared custom mappings");
    }
}

impl MappingStore for CustomMappings {
    fn snapshot(&self) -> MappingSnapshot {
        self.inner.snapshot()
    }
}

/// User corrections persisted to a JSON object file
#[derive(Debug)]
pub struct CorrectionStore {
    inner: CowTable,
    /// Path to persistence file
    path: PathBuf,
}

impl CorrectionStore {
    /// Create an empty store backed by `path` without reading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: CowTable::new(MappingTable::new()),
            path,
        }
    }

    /// Open a store, loading existing corrections. A missing file is an empty store.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload corrections from the persistence file
    pub fn load(&self) -> Result<(), StoreError> {
        crate::debug!("Loading corrections from {:?}", self.path);

        if !self.path.exists() {
            crate::debug!("No corrections file found, starting with empty store");
            return Ok(());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::LoadError(e.to_string()))?;
        let table =
            MappingTable::from_json(&content).map_err(|e| StoreError::LoadError(e.to_string()))?;

        let _writer = self.inner.writer.lock();
        let table = self.inner.replace(current_pairs(&table));
        crate::info!("Loaded {} correction(s)", table.len());
        Ok(())
    }

    /// All entries in insertion order
    pub fn list(&self) -> Vec<MappingEntry> {
        self.inner.snapshot().table.entries().to_vec()
    }

    /// Add or overwrite corrections and persist.
    ///
    /// On `PersistenceError` the corrections are still active in memory.
    #[must_use = "this returns a Result that should be handled"]
    pub fn add<I>(&self, pairs: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let pairs = validate_pairs(pairs)?;
        let count = pairs.len();
        let _writer = self.inner.writer.lock();
        let mut entries = current_pairs(&self.inner.snapshot().table);
        entries.extend(pairs);
        let table = self.inner.replace(entries);
        crate::info!("Added {} correction(s)", count);
        self.save(&table)?;
        Ok(count)
    }

    /// Remove a correction by phrase (case-insensitive) and persist
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(&self, phrase: &str) -> Result<(), StoreError> {
        let _writer = self.inner.writer.lock();
        let remaining = without_phrase(&self.inner.snapshot().table, phrase)?;
        let table = self.inner.replace(remaining);
        crate::info!("Removed correction '{}'", phrase.trim());
        self.save(&table)
    }

    /// Remove every correction and persist
    #[must_use = "this returns a Result that should be handled"]
    pub fn clear(&self) -> Result<(), StoreError> {
        let _writer = self.inner.writer.lock();
        let table = self.inner.replace(Vec::new());
        crate::info!("Cleared corrections");
        self.save(&table)
    }

    /// Persist the table using atomic write (temp file + rename)
    fn save(&self, table: &MappingTable) -> Result<(), StoreError> {
        crate::debug!("Persisting {} correction(s) to {:?}", table.len(), self.path);

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::PersistenceError(e.to_string()))?;
        }

        let map: serde_json::Map<String, serde_json::Value> = table
            .entries()
            .iter()
            .map(|e| (e.phrase.clone(), serde_json::Value::String(e.replacement.clone())))
            .collect();
        let content = serde_json::to_string_pretty(&map)
            .map_err(|e| StoreError::PersistenceError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path).map_err(|e| {
                StoreError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| StoreError::PersistenceError(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .map_err(|e| StoreError::PersistenceError(format!("Failed to sync: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::PersistenceError(format!("Failed to rename: {}", e))
        })?;

        crate::debug!("Corrections persisted successfully");
        Ok(())
    }
}

impl MappingStore for CorrectionStore {
    fn snapshot(&self) -> MappingSnapshot {
        self.inner.snapshot()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
