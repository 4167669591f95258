//! Error types.
//!
//! Every failure maps onto one [`ErrorKind`] so callers can branch on the
//! kind of failure without parsing messages.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("object not found: s3://{bucket}/{object_key}")]
    NotFound { bucket: String, object_key: String },

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid batch file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    NotFound,
    Crypto,
    Storage,
    Io,
}

impl Error {
    /// Build a not-found error for an object location.
    pub fn not_found(bucket: &str, object_key: &str) -> Self {
        Self::NotFound {
            bucket: bucket.to_string(),
            object_key: object_key.to_string(),
        }
    }

    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Validation(_) | Self::Json(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Crypto(_) => ErrorKind::Crypto,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("bucket name is not set")]
    MissingBucketName,

    #[error("KMS key id is not set")]
    MissingKmsKeyId,

    #[error("store root is not set (required for the fs store)")]
    MissingStoreRoot,

    #[error("unknown store: {0}. Supported: s3, fs")]
    UnknownStore(String),

    #[error("{backend} support not compiled. Rebuild with: cargo install secrets-vault --features {feature}")]
    BackendUnavailable {
        backend: &'static str,
        feature: &'static str,
    },

    #[error("failed to initialize AWS backends: {0}")]
    AwsInit(String),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("secret value cannot be empty for key: {0}")]
    EmptyValue(String),

    #[error("settings[{index}].{field} is empty")]
    BatchEntry { index: usize, field: &'static str },

    #[error("file already exists: {0} (use --overwrite to replace it)")]
    FileExists(String),
}

/// Key-management failures.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("decrypted value is not valid UTF-8")]
    InvalidUtf8,
}

/// Object-store failures.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("upload failed for {object_key}: {reason}")]
    PutFailed { object_key: String, reason: String },

    #[error("download failed for {object_key}: {reason}")]
    GetFailed { object_key: String, reason: String },

    #[error("delete failed for {object_key}: {reason}")]
    DeleteFailed { object_key: String, reason: String },

    #[error("invalid object key: {0}")]
    InvalidObjectKey(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
