//! Shared AWS plumbing for the KMS and S3 backends.
//!
//! The SDKs are async; the vault is not. Both backends drive their calls on
//! one current-thread runtime owned by an [`AwsContext`].

use std::future::Future;
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Runtime plus resolved SDK configuration.
#[derive(Clone)]
pub struct AwsContext {
    runtime: Arc<Runtime>,
    sdk_config: Arc<SdkConfig>,
}

impl AwsContext {
    /// Build a runtime and load SDK configuration.
    ///
    /// `region` overrides the region from the environment/profile; `None`
    /// lets the SDK pick its default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AwsInit` if the runtime cannot be created.
    pub fn new(region: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigError::AwsInit(format!("failed to create runtime: {}", e)))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            debug!(region = %region, "using explicit AWS region");
            loader = loader.region(Region::new(region.to_string()));
        }
        let sdk_config = runtime.block_on(loader.load());

        Ok(Self {
            runtime: Arc::new(runtime),
            sdk_config: Arc::new(sdk_config),
        })
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Run a future to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
