//! Vault client.
//!
//! Orchestrates encrypt-then-store for writes and fetch-then-decrypt for
//! reads. Every operation is a single request/response sequence: input is
//! validated first, then at most two external calls are made, and failures
//! propagate without retry.

use tracing::{debug, info, trace};
use zeroize::Zeroizing;

use crate::core::batch::BatchEntry;
use crate::core::config::VaultConfig;
use crate::core::kms::KeyManagement;
use crate::core::store::{ObjectStore, ServerSideEncryption};
use crate::core::types::ObjectKey;
use crate::core::validation::{validate_key, validate_value};
use crate::error::{ConfigError, CryptoError, Result, ValidationError};

/// Client for storing and retrieving secrets.
///
/// Holds no state between calls beyond its configuration and the two
/// backends. Concurrent writers to the same key are not coordinated; the
/// object store decides who wins.
pub struct VaultClient {
    config: VaultConfig,
    kms: Box<dyn KeyManagement>,
    store: Box<dyn ObjectStore>,
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("config", &self.config)
            .field("kms", &self.kms.name())
            .field("store", &self.store.name())
            .finish()
    }
}

impl VaultClient {
    pub fn new(
        config: VaultConfig,
        kms: Box<dyn KeyManagement>,
        store: Box<dyn ObjectStore>,
    ) -> Self {
        debug!(
            kms = kms.name(),
            store = store.name(),
            bucket = %config.bucket_name(),
            "vault client ready"
        );
        Self { config, kms, store }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Object key a secret is stored under.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyKey` if the key is blank.
    pub fn object_key(&self, key: &str) -> Result<ObjectKey> {
        let key = validate_key(key)?;
        Ok(self.config.object_key(key))
    }

    /// Encrypt a value and store it under `key`.
    ///
    /// Overwrites any existing object for the key. The plaintext never
    /// reaches the object store.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank key or empty value and
    /// `ConfigError::MissingKmsKeyId` when no key id is configured, all
    /// before any external call. KMS and store failures propagate as
    /// `CryptoError` and `StorageError`.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let key = validate_key(key)?;
        validate_value(key, value)?;
        if !self.config.has_kms_key() {
            return Err(ConfigError::MissingKmsKeyId.into());
        }

        info!(key = %key, "encrypting");
        let ciphertext = self.kms.encrypt(self.config.kms_key_id(), value.as_bytes())?;
        trace!(ciphertext_len = ciphertext.len(), "encrypted");

        let object_key = self.config.object_key(key);
        info!(
            key = %key,
            "uploading to s3://{}/{}",
            self.config.bucket_name(),
            object_key
        );
        self.store.put(
            self.config.bucket_name(),
            &object_key,
            &ciphertext,
            Some(ServerSideEncryption::Aes256),
        )
    }

    /// Fetch and decrypt the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyKey` for a blank key, `Error::NotFound`
    /// if nothing is stored, and `CryptoError` if decryption fails or the
    /// plaintext is not UTF-8.
    pub fn get(&self, key: &str) -> Result<Zeroizing<String>> {
        let key = validate_key(key)?;
        let object_key = self.config.object_key(key);

        info!(
            key = %key,
            "retrieving from s3://{}/{}",
            self.config.bucket_name(),
            object_key
        );
        let ciphertext = self.store.get(self.config.bucket_name(), &object_key)?;
        trace!(ciphertext_len = ciphertext.len(), "downloaded");

        let plaintext = self.kms.decrypt(&ciphertext)?;
        let value = std::str::from_utf8(&plaintext).map_err(|_| CryptoError::InvalidUtf8)?;
        Ok(Zeroizing::new(value.to_string()))
    }

    /// Delete the object stored under `key`.
    ///
    /// Succeeds when nothing was stored, unless the store itself reports
    /// not-found, in which case that error is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyKey` for a blank key, or whatever the
    /// store reports.
    pub fn delete(&self, key: &str) -> Result<()> {
        let key = validate_key(key)?;
        let object_key = self.config.object_key(key);

        info!(
            key = %key,
            "deleting s3://{}/{}",
            self.config.bucket_name(),
            object_key
        );
        self.store.delete(self.config.bucket_name(), &object_key)
    }

    /// Store a list of secrets one at a time, in order.
    ///
    /// Stops at the first failure: later entries are not attempted and
    /// earlier ones stay written.
    ///
    /// # Returns
    ///
    /// Number of secrets written.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BatchEntry` for an entry with an empty key
    /// or value, or the error of the first failing `put`.
    pub fn put_batch(&self, entries: &[BatchEntry]) -> Result<usize> {
        info!(count = entries.len(), "storing batch");

        for (index, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(ValidationError::BatchEntry {
                    index,
                    field: "key",
                }
                .into());
            }
            if entry.value.is_empty() {
                return Err(ValidationError::BatchEntry {
                    index,
                    field: "value",
                }
                .into());
            }
            self.put(&entry.key, &entry.value)?;
        }

        Ok(entries.len())
    }
}
