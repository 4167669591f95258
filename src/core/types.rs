//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Storage identifier of a secret: `prefix + key`.
pub type ObjectKey = String;

/// KMS key id, ARN, or alias.
pub type KmsKeyId = String;

/// Ciphertext blob as returned by the key-management service.
pub type Ciphertext = Vec<u8>;
