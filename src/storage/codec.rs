//! Fail-soft JSON codec over the blob store port.
//!
//! The managers persist whole aggregates through these helpers. Reads that
//! fail for any reason fall back to a caller-supplied default, and writes
//! and removals are fire-and-forget; failures surface only as `tracing`
//! warnings, never to callers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::ports::BlobStore;

/// Loads and deserializes the value stored under `key`.
///
/// Returns `default` when the key is absent, the backend fails, or the
/// stored blob does not parse. The stored blob is left as-is in the failure
/// cases.
#[must_use]
pub fn load_or_default<S, T>(store: &S, key: &str, default: T) -> T
where
    S: BlobStore + ?Sized,
    T: DeserializeOwned,
{
    let blob = match store.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return default,
        Err(err) => {
            tracing::warn!(key, error = %err, "blob read failed, using default");
            return default;
        }
    };
    match serde_json::from_str(&blob) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored blob is unparsable, using default");
            default
        }
    }
}

/// Serializes `value` and stores it under `key`.
///
/// Best-effort: serialization or backend failures are logged and swallowed,
/// and the in-memory state stays authoritative until the next successful
/// write.
pub fn save<S, T>(store: &S, key: &str, value: &T)
where
    S: BlobStore + ?Sized,
    T: Serialize,
{
    let blob = match serde_json::to_string(value) {
        Ok(blob) => blob,
        Err(err) => {
            tracing::warn!(key, error = %err, "blob serialization failed, skipping write");
            return;
        }
    };
    if let Err(err) = store.write(key, &blob) {
        tracing::warn!(key, error = %err, "blob write failed");
    }
}

/// Removes the blob stored under `key`.
///
/// Best-effort, same policy as [`save`].
pub fn discard<S>(store: &S, key: &str)
where
    S: BlobStore + ?Sized,
{
    if let Err(err) = store.remove(key) {
        tracing::warn!(key, error = %err, "blob removal failed");
    }
}
