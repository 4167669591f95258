//! Mock KMS backend for testing.
//!
//! Uses hex encoding tagged with the key id. NOT cryptographically secure,
//! it only exercises the plumbing.

use zeroize::Zeroizing;

use super::KeyManagement;
use crate::core::types::Ciphertext;
use crate::error::{CryptoError, Result};

const TAG: &str = "mock-kms";

/// Mock KMS backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockKms;

impl KeyManagement for MockKms {
    fn name(&self) -> &'static str {
        "mock-kms"
    }

    fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Ciphertext> {
        if key_id.trim().is_empty() {
            return Err(CryptoError::EncryptionFailed("no KMS key id".to_string()).into());
        }
        let hex: String = plaintext.iter().map(|b| format!("{:02x}", b)).collect();
        Ok(format!("{}:{}:{}", TAG, key_id, hex).into_bytes())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let text = std::str::from_utf8(ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed("not a mock-kms ciphertext".to_string()))?;

        let hex = text
            .strip_prefix(TAG)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|rest| rest.rsplit_once(':'))
            .map(|(_, hex)| hex)
            .ok_or_else(|| {
                CryptoError::DecryptionFailed("not a mock-kms ciphertext".to_string())
            })?;

        if hex.len() % 2 != 0 {
            return Err(CryptoError::DecryptionFailed("invalid hex length".to_string()).into());
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CryptoError::DecryptionFailed("invalid hex digit".to_string()).into());
        }

        let bytes: std::result::Result<Vec<u8>, _> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect();
        let bytes =
            bytes.map_err(|e| CryptoError::DecryptionFailed(format!("invalid hex: {}", e)))?;
        Ok(Zeroizing::new(bytes))
    }
}
