//! Amazon S3 object store.
//!
//! Enable with `--features aws`. Uploads request SSE-S3 (AES-256) at rest
//! in addition to the KMS encryption already applied by the vault.

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ServerSideEncryption as S3Encryption;
use tracing::trace;

use super::{ObjectStore, ServerSideEncryption};
use crate::core::aws::AwsContext;
use crate::error::{Error, Result, StorageError};

/// S3-backed object store.
pub struct S3 {
    context: AwsContext,
    client: aws_sdk_s3::Client,
}

impl S3 {
    /// Create an S3 client for the context's region.
    pub fn new(context: AwsContext) -> Self {
        let client = aws_sdk_s3::Client::new(context.sdk_config());
        Self { context, client }
    }
}

impl ObjectStore for S3 {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn put(
        &self,
        bucket: &str,
        object_key: &str,
        bytes: &[u8],
        encryption: Option<ServerSideEncryption>,
    ) -> Result<()> {
        trace!(bucket = %bucket, object_key = %object_key, len = bytes.len(), "s3 put_object");

        let encryption = encryption.map(|sse| match sse {
            ServerSideEncryption::Aes256 => S3Encryption::Aes256,
        });

        self.context.block_on(async {
            self.client
                .put_object()
                .bucket(bucket)
                .key(object_key)
                .body(ByteStream::from(bytes.to_vec()))
                .set_server_side_encryption(encryption)
                .send()
                .await
                .map_err(|e| StorageError::PutFailed {
                    object_key: object_key.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;
            Ok(())
        })
    }

    fn get(&self, bucket: &str, object_key: &str) -> Result<Vec<u8>> {
        trace!(bucket = %bucket, object_key = %object_key, "s3 get_object");

        self.context.block_on(async {
            let output = match self
                .client
                .get_object()
                .bucket(bucket)
                .key(object_key)
                .send()
                .await
            {
                Ok(output) => output,
                Err(e) => {
                    let missing = e
                        .as_service_error()
                        .map(|se| se.is_no_such_key())
                        .unwrap_or(false);
                    if missing {
                        return Err(Error::not_found(bucket, object_key));
                    }
                    return Err(StorageError::GetFailed {
                        object_key: object_key.to_string(),
                        reason: DisplayErrorContext(&e).to_string(),
                    }
                    .into());
                }
            };

            let body = output
                .body
                .collect()
                .await
                .map_err(|e| StorageError::GetFailed {
                    object_key: object_key.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(body.into_bytes().to_vec())
        })
    }

    fn delete(&self, bucket: &str, object_key: &str) -> Result<()> {
        trace!(bucket = %bucket, object_key = %object_key, "s3 delete_object");

        self.context.block_on(async {
            self.client
                .delete_object()
                .bucket(bucket)
                .key(object_key)
                .send()
                .await
                .map_err(|e| StorageError::DeleteFailed {
                    object_key: object_key.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;
            Ok(())
        })
    }
}
