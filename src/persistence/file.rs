//! File-backed filter store: one JSON file per key

use super::FilterStore;
use crate::core::error::{MatchmakerError, StorageError};
use anyhow::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filter store keeping each key in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileFilterStore {
    dir: PathBuf,
}

impl FileFilterStore {
    /// Use `dir` as the storage directory; it is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced so a key can never
    /// escape the directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl FilterStore for FileFilterStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MatchmakerError::from(StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
            .into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let write = || -> std::io::Result<()> {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.path_for(key), value)
        };

        write().map_err(|e| {
            MatchmakerError::from(StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
            .into()
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MatchmakerError::from(StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
            .into()),
        }
    }
}
