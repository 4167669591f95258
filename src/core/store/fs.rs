//! Filesystem object store.
//!
//! Objects live at `<root>/<bucket>/<encoded object key>`, one file per
//! object. The whole key is percent-encoded into a single file name, so
//! `/` and `.` never act as path syntax: `a/b`, `a//b` and `a/./b` are
//! three different files, and `db` can coexist with `db/pass`.
//!
//! There is no storage-layer encryption here: blobs are KMS ciphertext and
//! files are created with 0600 permissions on Unix.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Component, Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, trace};

use super::{ObjectStore, ServerSideEncryption};
use crate::error::{Error, Result, StorageError};

/// Bytes kept as-is in file names; everything else is `%XX`.
const FILE_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Filesystem-backed object store.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File holding an object.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidObjectKey` for an empty object key, or a
    /// bucket that is not a single plain directory name.
    pub fn object_path(&self, bucket: &str, object_key: &str) -> Result<PathBuf> {
        check_bucket(bucket)?;
        if object_key.is_empty() {
            return Err(StorageError::InvalidObjectKey(object_key.to_string()).into());
        }
        let file_name = utf8_percent_encode(object_key, FILE_NAME).to_string();
        Ok(self.root.join(bucket).join(file_name))
    }
}

fn check_bucket(bucket: &str) -> Result<()> {
    let mut components = Path::new(bucket).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == bucket => Ok(()),
        _ => Err(StorageError::InvalidObjectKey(bucket.to_string()).into()),
    }
}

impl ObjectStore for Filesystem {
    fn name(&self) -> &'static str {
        "fs"
    }

    fn put(
        &self,
        bucket: &str,
        object_key: &str,
        bytes: &[u8],
        encryption: Option<ServerSideEncryption>,
    ) -> Result<()> {
        let path = self.object_path(bucket, object_key)?;
        let failed = |e: std::io::Error| StorageError::PutFailed {
            object_key: object_key.to_string(),
            reason: e.to_string(),
        };

        if let Some(sse) = encryption {
            trace!(sse = sse.as_str(), "fs store ignores storage-layer encryption");
        }

        if let Some(bucket_dir) = path.parent() {
            fs::create_dir_all(bucket_dir).map_err(failed)?;
        }
        fs::write(&path, bytes).map_err(failed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).map_err(failed)?;
        }

        debug!(path = %path.display(), len = bytes.len(), "wrote object");
        Ok(())
    }

    fn get(&self, bucket: &str, object_key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, object_key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                Err(Error::not_found(bucket, object_key))
            }
            Err(e) => Err(StorageError::GetFailed {
                object_key: object_key.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn delete(&self, bucket: &str, object_key: &str) -> Result<()> {
        let path = self.object_path(bucket, object_key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!(path = %path.display(), "object already absent");
                Ok(())
            }
            Err(e) => Err(StorageError::DeleteFailed {
                object_key: object_key.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}
