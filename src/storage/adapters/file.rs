//! File-backed blob store for durable state.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::storage::ports::{BlobStore, StoreError, StoreResult};

/// Durable blob store keeping one JSON file per key.
///
/// The store holds a capability-scoped directory handle; a key `k` maps to
/// the file `k.json` inside it. Writes land in a temporary sibling first and
/// are renamed into place, so an interrupted write leaves the previous blob
/// intact rather than a torn one.
#[derive(Debug)]
pub struct FileStore {
    root: Dir,
}

impl FileStore {
    /// Opens a store rooted at `path`, which must be an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the directory cannot be opened.
    pub fn open(path: &Utf8Path) -> StoreResult<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(StoreError::backend)?;
        Ok(Self { root })
    }

    /// Creates a store from an already-opened directory capability.
    #[must_use]
    pub const fn from_dir(root: Dir) -> Self {
        Self { root }
    }

    fn blob_file(key: &str) -> String {
        format!("{key}.json")
    }

    fn staging_file(key: &str) -> String {
        format!("{key}.json.tmp")
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match self.root.read_to_string(Self::blob_file(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::backend(err)),
        }
    }

    fn write(&self, key: &str, blob: &str) -> StoreResult<()> {
        let staging = Self::staging_file(key);
        self.root
            .write(&staging, blob)
            .map_err(StoreError::backend)?;
        self.root
            .rename(&staging, &self.root, Self::blob_file(key))
            .map_err(StoreError::backend)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match self.root.remove_file(Self::blob_file(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::backend(err)),
        }
    }
}
