//! Key-management port.
//!
//! The vault never encrypts anything itself: plaintext goes to a
//! [`KeyManagement`] implementation and only the returned ciphertext is
//! handed to the object store.
//!
//! ## Backends
//!
//! - **AWS KMS**: Feature-gated (`aws`). Uses AWS Key Management Service.
//! - **Mock**: test builds and the `test-kms` feature only. Reversible hex
//!   encoding, not cryptography.

use zeroize::Zeroizing;

use crate::core::types::Ciphertext;
use crate::error::Result;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(any(test, feature = "test-kms"))]
pub mod mock;

/// Encrypt/decrypt capability backed by an external key-management service.
pub trait KeyManagement {
    /// Encrypt plaintext under the master key `key_id`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::EncryptionFailed` if the key is invalid or
    /// inaccessible, or the service call fails.
    fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Ciphertext>;

    /// Decrypt a ciphertext blob.
    ///
    /// The blob identifies the key that produced it, so no key id is passed.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::DecryptionFailed` if the blob is malformed or the
    /// caller may not use the key that produced it.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
