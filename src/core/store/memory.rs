//! In-memory object store.
//!
//! Clones share the same objects, so a caller can keep a handle for
//! inspection after giving one to a `VaultClient`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ObjectStore, ServerSideEncryption};
use crate::error::{Error, Result, StorageError};

/// A stored blob and the encryption-at-rest requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub encryption: Option<ServerSideEncryption>,
}

type Objects = BTreeMap<(String, String), StoredObject>;

/// In-memory object store.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    objects: Arc<Mutex<Objects>>,
    strict_delete: bool,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `NotFound` when deleting an absent object, like stores that
    /// distinguish the two cases.
    pub fn with_strict_delete(mut self) -> Self {
        self.strict_delete = true;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Objects>> {
        self.objects
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()).into())
    }

    /// Inspect a stored object.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned, as do
    /// the other inspection methods.
    pub fn object(&self, bucket: &str, object_key: &str) -> Result<Option<StoredObject>> {
        Ok(self
            .lock()?
            .get(&(bucket.to_string(), object_key.to_string()))
            .cloned())
    }

    /// Object keys in a bucket, sorted.
    pub fn keys(&self, bucket: &str) -> Result<Vec<String>> {
        Ok(self
            .lock()?
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ObjectStore for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn put(
        &self,
        bucket: &str,
        object_key: &str,
        bytes: &[u8],
        encryption: Option<ServerSideEncryption>,
    ) -> Result<()> {
        self.lock()?.insert(
            (bucket.to_string(), object_key.to_string()),
            StoredObject {
                bytes: bytes.to_vec(),
                encryption,
            },
        );
        Ok(())
    }

    fn get(&self, bucket: &str, object_key: &str) -> Result<Vec<u8>> {
        self.lock()?
            .get(&(bucket.to_string(), object_key.to_string()))
            .map(|object| object.bytes.clone())
            .ok_or_else(|| Error::not_found(bucket, object_key))
    }

    fn delete(&self, bucket: &str, object_key: &str) -> Result<()> {
        let removed = self
            .lock()?
            .remove(&(bucket.to_string(), object_key.to_string()));
        if removed.is_none() && self.strict_delete {
            return Err(Error::not_found(bucket, object_key));
        }
        Ok(())
    }
}
