//! Blob store port for keyed, whole-value persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed blob persistence contract.
///
/// Keys address whole serialized aggregates; a write replaces the entire
/// blob stored under its key (last-write-wins). This is the crate's
/// counterpart of browser local/session storage: flat string keys, string
/// values, no partial updates.
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`.
    ///
    /// Returns `None` when no blob is stored under the key; absence is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the underlying store cannot be
    /// read.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the blob cannot be written.
    fn write(&self, key: &str, blob: &str) -> StoreResult<()>;

    /// Removes the blob stored under `key`.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the removal fails for a reason
    /// other than absence.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Storage-backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
