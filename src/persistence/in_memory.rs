//! In-memory filter store for testing and development

use super::FilterStore;
use crate::core::error::{MatchmakerError, StorageError};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory filter store implementation
///
/// Useful for testing and for sessions that should not outlive the process.
/// Uses RwLock for thread-safe access; clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryFilterStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryFilterStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(e: impl std::fmt::Display) -> anyhow::Error {
        MatchmakerError::from(StorageError::LockPoisoned {
            message: e.to_string(),
        })
        .into()
    }
}

impl FilterStore for InMemoryFilterStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(Self::poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
