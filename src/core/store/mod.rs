//! Object-store port.
//!
//! Ciphertext blobs are persisted through an [`ObjectStore`]. The vault
//! computes object keys; stores only move bytes.
//!
//! ## Backends
//!
//! - **S3**: Feature-gated (`aws`). Amazon S3 with SSE-S3 at rest.
//! - **Filesystem**: `<root>/<bucket>/<object_key>`, for local development.
//! - **Memory**: in-process map, for embedding and tests.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `ObjectStore` trait
//! 2. Add the implementation in a new file (e.g., `gcs.rs`)
//! 3. Re-export from this module and wire it into `core::backend`

use crate::error::Result;

mod fs;
mod memory;

#[cfg(feature = "aws")]
pub mod s3;

pub use fs::Filesystem;
pub use memory::{Memory, StoredObject};

/// Storage-layer encryption requested on upload.
///
/// Defense in depth on top of KMS encryption, never a substitute for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSideEncryption {
    /// SSE-S3 (AES-256, keys managed by the store)
    Aes256,
}

impl ServerSideEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
        }
    }
}

/// Blob storage keyed by bucket and object key.
pub trait ObjectStore {
    /// Store bytes, replacing any existing object at the same key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the upload fails.
    fn put(
        &self,
        bucket: &str,
        object_key: &str,
        bytes: &[u8],
        encryption: Option<ServerSideEncryption>,
    ) -> Result<()>;

    /// Fetch an object's bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the object does not exist, or
    /// `StorageError` if the download fails.
    fn get(&self, bucket: &str, object_key: &str) -> Result<Vec<u8>>;

    /// Delete an object.
    ///
    /// Deleting a missing object is not an error for the built-in stores.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    fn delete(&self, bucket: &str, object_key: &str) -> Result<()>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
