//! JSON file backend
//!
//! Keeps every key in one JSON object on disk. Each call reads the file and
//! each write replaces it atomically, so the file is never half written.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::warn;

use super::file_io::{read_json, write_json_atomic};
use super::kv::KeyValueStore;
use crate::error::OnboardResult;

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> OnboardResult<Entries> {
        read_json(&self.path)
    }

    /// Entries to write over; an unreadable file is replaced rather than kept
    fn entries_for_update(&self) -> Entries {
        self.read_entries().unwrap_or_else(|e| {
            warn!("Discarding unreadable store {}: {}", self.path.display(), e);
            Entries::new()
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> OnboardResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> OnboardResult<()> {
        let mut entries = self.entries_for_update();
        entries.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &entries)
    }

    fn remove(&mut self, key: &str) -> OnboardResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.entries_for_update();
        if entries.remove(key).is_some() {
            write_json_atomic(&self.path, &entries)?;
        }
        Ok(())
    }
}
