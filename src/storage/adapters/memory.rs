//! In-memory blob store for ephemeral state and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{BlobStore, StoreError, StoreResult};

/// Thread-safe in-memory blob store.
///
/// Models per-session browser storage: contents live exactly as long as the
/// process and vanish with it. Cloning shares the underlying map, so one
/// store instance can back several services.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a poisoned-lock failure onto the port error type.
fn lock_poisoned(err: impl std::fmt::Display) -> StoreError {
    StoreError::backend(std::io::Error::other(err.to_string()))
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let blobs = self.blobs.read().map_err(lock_poisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.write().map_err(lock_poisoned)?;
        blobs.insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.write().map_err(lock_poisoned)?;
        blobs.remove(key);
        Ok(())
    }
}
