//! Constants used throughout secrets-vault.
//!
//! Centralizes file names and environment variable names.

/// Project-local configuration file name.
pub const CONFIG_FILE: &str = ".secrets-vault.toml";

/// Configuration directory name under the user config dir.
pub const CONFIG_DIR: &str = "secrets-vault";

/// Configuration file name inside [`CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable selecting the log filter.
pub const LOG_ENV: &str = "SECRETS_VAULT_LOG";

/// Environment overrides for the `[vault]` settings.
pub const ENV_KMS_KEY_ID: &str = "SECRETS_VAULT_KMS_KEY_ID";
pub const ENV_BUCKET_NAME: &str = "SECRETS_VAULT_BUCKET_NAME";
pub const ENV_PREFIX: &str = "SECRETS_VAULT_PREFIX";
pub const ENV_REGION: &str = "SECRETS_VAULT_REGION";
pub const ENV_STORE: &str = "SECRETS_VAULT_STORE";
pub const ENV_STORE_ROOT: &str = "SECRETS_VAULT_STORE_ROOT";

/// Number of empty entries written by `create-batch-file`.
pub const SKELETON_ENTRIES: usize = 3;
