//! Vault configuration.
//!
//! [`VaultConfig`] is the validated set of parameters that governs where and
//! how secrets are stored. [`Settings`] is the loader that produces it from a
//! `.secrets-vault.toml` file plus environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{KmsKeyId, ObjectKey};
use crate::error::{ConfigError, Result};

/// Whether a KMS key id must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Strict: the caller will encrypt, so the key id is mandatory.
    Required,
    /// Permissive: reads and deletes work without a key id.
    Optional,
}

/// Validated vault configuration.
///
/// The bucket name is never empty or whitespace-only; every constructor and
/// mutator enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    kms_key_id: KmsKeyId,
    bucket_name: String,
    prefix: String,
    region_name: Option<String>,
}

impl VaultConfig {
    /// Create a configuration.
    ///
    /// The key id and bucket name are trimmed; the prefix is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingBucketName` for a blank bucket, and
    /// `ConfigError::MissingKmsKeyId` for a blank key id under
    /// [`KeyPolicy::Required`].
    pub fn new(
        kms_key_id: &str,
        bucket_name: &str,
        prefix: &str,
        policy: KeyPolicy,
    ) -> Result<Self> {
        let kms_key_id = kms_key_id.trim();
        if policy == KeyPolicy::Required && kms_key_id.is_empty() {
            return Err(ConfigError::MissingKmsKeyId.into());
        }

        let mut config = Self {
            kms_key_id: kms_key_id.to_string(),
            bucket_name: String::new(),
            prefix: prefix.to_string(),
            region_name: None,
        };
        config.set_bucket_name(bucket_name)?;
        Ok(config)
    }

    pub fn kms_key_id(&self) -> &str {
        &self.kms_key_id
    }

    pub fn has_kms_key(&self) -> bool {
        !self.kms_key_id.is_empty()
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Region hint for the AWS clients; `None` means the SDK default.
    pub fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }

    pub fn set_kms_key_id(&mut self, kms_key_id: &str) {
        self.kms_key_id = kms_key_id.trim().to_string();
    }

    /// Replace the bucket name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingBucketName` if the name is blank; the
    /// previous name is kept.
    pub fn set_bucket_name(&mut self, bucket_name: &str) -> Result<()> {
        let trimmed = bucket_name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBucketName.into());
        }
        self.bucket_name = trimmed.to_string();
        Ok(())
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    /// Override the region. Empty strings clear it.
    pub fn set_region_name(&mut self, region_name: Option<String>) {
        self.region_name = region_name.filter(|r| !r.trim().is_empty());
    }

    /// Storage identifier for a (trimmed) secret key.
    ///
    /// Plain concatenation: no separator is inserted between prefix and key.
    pub fn object_key(&self, key: &str) -> ObjectKey {
        format!("{}{}", self.prefix, key)
    }
}

/// Which object store backs the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Fs,
}

impl StoreKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Fs => "fs",
        }
    }
}

/// Settings file contents (`.secrets-vault.toml`).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub vault: VaultSection,
}

/// The `[vault]` table.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultSection {
    pub kms_key_id: Option<String>,
    pub bucket_name: Option<String>,
    pub prefix: Option<String>,
    pub region: Option<String>,
    /// "s3" (default) or "fs"
    pub store: Option<String>,
    /// Root directory for the fs store
    pub store_root: Option<PathBuf>,
}

impl Settings {
    /// Load settings and apply environment overrides.
    ///
    /// Looks at `explicit` if given, otherwise `./.secrets-vault.toml`, then
    /// the user config directory. No file at all yields empty settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if an explicit path cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match Self::locate(explicit) {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
                Self::from_toml(&contents)?
            }
            None => {
                debug!("no settings file found, using environment only");
                Self::default()
            }
        };

        settings.apply_overrides(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e).into())
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(constants::CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| {
                dir.join(constants::CONFIG_DIR)
                    .join(constants::GLOBAL_CONFIG_FILE)
            })
            .filter(|path| path.exists())
    }

    /// Overlay environment values on top of file values.
    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let vault = &mut self.vault;
        if let Some(v) = lookup(constants::ENV_KMS_KEY_ID) {
            vault.kms_key_id = Some(v);
        }
        if let Some(v) = lookup(constants::ENV_BUCKET_NAME) {
            vault.bucket_name = Some(v);
        }
        if let Some(v) = lookup(constants::ENV_PREFIX) {
            vault.prefix = Some(v);
        }
        if let Some(v) = lookup(constants::ENV_REGION) {
            vault.region = Some(v);
        }
        if let Some(v) = lookup(constants::ENV_STORE) {
            vault.store = Some(v);
        }
        if let Some(v) = lookup(constants::ENV_STORE_ROOT) {
            vault.store_root = Some(PathBuf::from(v));
        }
    }

    /// Selected object store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownStore` for anything but "s3" or "fs".
    pub fn store_kind(&self) -> Result<StoreKind> {
        match self.vault.store.as_deref().map(str::trim) {
            None | Some("") | Some("s3") => Ok(StoreKind::S3),
            Some("fs") => Ok(StoreKind::Fs),
            Some(other) => Err(ConfigError::UnknownStore(other.to_string()).into()),
        }
    }

    /// Build a validated [`VaultConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKmsKeyId` under [`KeyPolicy::Required`]
    /// when no key id is set, and `ConfigError::MissingBucketName` when no
    /// bucket is set.
    pub fn into_config(&self, policy: KeyPolicy) -> Result<VaultConfig> {
        let vault = &self.vault;
        let kms_key_id = vault.kms_key_id.as_deref().unwrap_or_default();
        let bucket_name = vault.bucket_name.as_deref().unwrap_or_default();
        let prefix = vault.prefix.as_deref().unwrap_or_default();

        debug!(kms_key_id = %kms_key_id, "KMS key id");
        debug!(bucket = %bucket_name, "S3 bucket name");
        debug!(prefix = %prefix, "S3 prefix");

        let mut config = VaultConfig::new(kms_key_id, bucket_name, prefix, policy)?;
        config.set_region_name(vault.region.clone());
        Ok(config)
    }
}
