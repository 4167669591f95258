//! AWS KMS backend.
//!
//! Enable with `--features aws`. Credentials come from the default AWS
//! provider chain (environment, profile, instance role).

use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use tracing::trace;
use zeroize::Zeroizing;

use super::KeyManagement;
use crate::core::aws::AwsContext;
use crate::core::types::Ciphertext;
use crate::error::{CryptoError, Result};

/// AWS KMS key-management backend.
///
/// KMS embeds the key reference in the ciphertext, so decryption doesn't
/// need a key id.
pub struct AwsKms {
    context: AwsContext,
    client: aws_sdk_kms::Client,
}

impl AwsKms {
    /// Create a KMS client for the context's region.
    pub fn new(context: AwsContext) -> Self {
        let client = aws_sdk_kms::Client::new(context.sdk_config());
        Self { context, client }
    }
}

impl KeyManagement for AwsKms {
    fn name(&self) -> &'static str {
        "aws-kms"
    }

    fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Ciphertext> {
        trace!(
            key_id = %key_id,
            plaintext_len = plaintext.len(),
            "encrypting with AWS KMS"
        );

        self.context.block_on(async {
            let result = self
                .client
                .encrypt()
                .key_id(key_id)
                .plaintext(Blob::new(plaintext))
                .send()
                .await
                .map_err(|e| {
                    CryptoError::EncryptionFailed(format!(
                        "KMS encrypt failed: {}",
                        DisplayErrorContext(&e)
                    ))
                })?;

            let blob = result
                .ciphertext_blob()
                .ok_or_else(|| CryptoError::EncryptionFailed("no ciphertext returned".into()))?;

            trace!(ciphertext_len = blob.as_ref().len(), "encrypted with AWS KMS");
            Ok(blob.as_ref().to_vec())
        })
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with AWS KMS");

        self.context.block_on(async {
            let result = self
                .client
                .decrypt()
                .ciphertext_blob(Blob::new(ciphertext))
                .send()
                .await
                .map_err(|e| {
                    CryptoError::DecryptionFailed(format!(
                        "KMS decrypt failed: {}",
                        DisplayErrorContext(&e)
                    ))
                })?;

            let plaintext = result
                .plaintext()
                .ok_or_else(|| CryptoError::DecryptionFailed("no plaintext returned".into()))?;

            trace!(plaintext_len = plaintext.as_ref().len(), "decrypted with AWS KMS");
            Ok(Zeroizing::new(plaintext.as_ref().to_vec()))
        })
    }
}
