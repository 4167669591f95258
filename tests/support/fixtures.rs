//! Test fixtures and constants.

/// Bucket used by every test environment.
pub const BUCKET: &str = "secrets-bucket";

/// KMS key id written into test settings.
pub const KMS_KEY: &str = "arn:aws:kms:us-east-1:123456789012:key/test";

/// Default key prefix for test environments.
pub const PREFIX: &str = "app/";

/// Standard test secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("db-pass", "hunter2"),
    ("api-key", "sk-test-12345"),
    ("jwt/secret", "super-secret-jwt-token"),
    ("redis-url", "redis://localhost:6379"),
];

/// Batch file with an empty value in the second record.
pub const BATCH_WITH_GAP: &str = r#"[
  { "key": "k1", "value": "v1" },
  { "key": "k2", "value": "" },
  { "key": "k3", "value": "v3" }
]"#;
