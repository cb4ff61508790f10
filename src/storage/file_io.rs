//! JSON file helpers
//!
//! Writes go through a temp file in the same directory followed by a rename,
//! so a crash mid-write leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{OnboardError, OnboardResult};

fn storage_err(what: &str, path: &Path, e: impl std::fmt::Display) -> OnboardError {
    OnboardError::Storage(format!("Failed to {} {}: {}", what, path.display(), e))
}

/// Read JSON from `path`; a missing file reads as `T::default()`
pub fn read_json<T, P>(path: P) -> OnboardResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("open", path, e)),
    };
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> OnboardResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let write = || -> OnboardResult<()> {
        let file = File::create(&temp_path).map_err(|e| storage_err("create", &temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_err("serialize", &temp_path, e))?;
        writer.flush().map_err(|e| storage_err("flush", &temp_path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_err("sync", &temp_path, e))
    };

    if let Err(e) = write().and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| storage_err("replace", path, e))
    }) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    type Entries = BTreeMap<String, String>;

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Entries = read_json(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut data = Entries::new();
        data.insert("onboarding_progress".into(), "2".into());

        write_json_atomic(&path, &data).unwrap();
        let loaded: Entries = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        write_json_atomic(&path, &Entries::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("storage.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("storage.json");

        write_json_atomic(&path, &Entries::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_corrupt_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Entries, _>(&path).unwrap_err();
        assert!(matches!(err, OnboardError::Storage(_)));
    }
}
