//! Backend selection.
//!
//! Builds a [`VaultClient`] from settings, picking the key-management and
//! object-store implementations that are compiled in:
//! - KMS: AWS KMS (`aws`), or the mock under `test-kms`
//! - Store: S3 (`aws`) or the filesystem

use tracing::debug;

use crate::core::client::VaultClient;
use crate::core::config::{Settings, StoreKind, VaultConfig};
use crate::core::kms::KeyManagement;
use crate::core::store::{Filesystem, ObjectStore};
use crate::error::{ConfigError, Result};

#[cfg(feature = "aws")]
use crate::core::aws::AwsContext;

/// Connect a client for the configured backends.
///
/// # Errors
///
/// Returns `ConfigError::BackendUnavailable` if a needed backend was not
/// compiled in, `ConfigError::MissingStoreRoot` for an fs store without a
/// root, or `ConfigError::UnknownStore`.
pub fn connect(settings: &Settings, config: VaultConfig) -> Result<VaultClient> {
    let kind = settings.store_kind()?;
    debug!(store = kind.name(), "selected object store");
    let mut aws = LazyAws::new(config.region_name());

    let kms = key_management(&mut aws)?;
    let store = object_store(settings, kind, &mut aws)?;

    Ok(VaultClient::new(config, kms, store))
}

/// AWS context, created on first use and shared by both backends.
#[cfg_attr(not(feature = "aws"), allow(dead_code))]
struct LazyAws<'a> {
    region: Option<&'a str>,
    #[cfg(feature = "aws")]
    context: Option<AwsContext>,
}

impl<'a> LazyAws<'a> {
    fn new(region: Option<&'a str>) -> Self {
        Self {
            region,
            #[cfg(feature = "aws")]
            context: None,
        }
    }

    #[cfg(feature = "aws")]
    fn context(&mut self) -> Result<AwsContext> {
        if let Some(context) = &self.context {
            return Ok(context.clone());
        }
        debug!(region = ?self.region, "creating AWS context");
        let context = AwsContext::new(self.region)?;
        self.context = Some(context.clone());
        Ok(context)
    }
}

#[allow(unused_variables)]
fn key_management(aws: &mut LazyAws<'_>) -> Result<Box<dyn KeyManagement>> {
    #[cfg(any(test, feature = "test-kms"))]
    {
        debug!("using mock KMS backend");
        return Ok(Box::new(crate::core::kms::mock::MockKms));
    }

    #[cfg(all(not(test), not(feature = "test-kms"), feature = "aws"))]
    {
        debug!("using AWS KMS backend");
        return Ok(Box::new(crate::core::kms::aws::AwsKms::new(aws.context()?)));
    }

    #[cfg(all(not(test), not(feature = "test-kms"), not(feature = "aws")))]
    Err(ConfigError::BackendUnavailable {
        backend: "AWS KMS",
        feature: "aws",
    }
    .into())
}

#[allow(unused_variables)]
fn object_store(
    settings: &Settings,
    kind: StoreKind,
    aws: &mut LazyAws<'_>,
) -> Result<Box<dyn ObjectStore>> {
    match kind {
        StoreKind::Fs => {
            let root = settings
                .vault
                .store_root
                .clone()
                .ok_or(ConfigError::MissingStoreRoot)?;
            debug!(root = %root.display(), "using filesystem store");
            Ok(Box::new(Filesystem::new(root)))
        }

        #[cfg(feature = "aws")]
        StoreKind::S3 => {
            debug!("using S3 store");
            Ok(Box::new(crate::core::store::s3::S3::new(aws.context()?)))
        }

        #[cfg(not(feature = "aws"))]
        StoreKind::S3 => Err(ConfigError::BackendUnavailable {
            backend: "S3",
            feature: "aws",
        }
        .into()),
    }
}
