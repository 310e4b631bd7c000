//! S3-backed blob store

use crate::error::{BlobStoreError, Result};
use crate::BlobStore;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::debug;

/// Blob store keeping one object per key in a single bucket
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Wrap an already configured S3 client
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the default AWS credential chain
    ///
    /// `region` overrides the region the default chain would pick.
    pub async fn from_env(region: Option<String>, bucket: impl Into<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), bucket)
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let missing = err
                    .as_service_error()
                    .map(|e| e.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    BlobStoreError::NotFound(key.to_string())
                } else {
                    BlobStoreError::Backend(DisplayErrorContext(&err).to_string())
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| BlobStoreError::Backend(format!("failed to read object body: {}", e)))?
            .into_bytes()
            .to_vec();

        debug!(bucket = %self.bucket, key, size = data.len(), "Fetched object");
        Ok(data)
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|err| BlobStoreError::Backend(DisplayErrorContext(&err).to_string()))?;

        debug!(bucket = %self.bucket, key, size = data.len(), "Stored object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_sdk_s3::types::error::NoSuchKey;
    use aws_smithy_mocks::{mock, mock_client};

    fn access_denied() -> ErrorMetadata {
        ErrorMetadata::builder()
            .code("AccessDenied")
            .message("Access Denied")
            .build()
    }

    #[tokio::test]
    async fn test_get_returns_object_body() {
        let rule = mock!(Client::get_object)
            .match_requests(|req| {
                req.bucket() == Some("items") && req.key() == Some("amazon/B001")
            })
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(br#"{"ASIN":"B001"}"#))
                    .build()
            });
        let store = S3BlobStore::new(mock_client!(aws_sdk_s3, [&rule]), "items");

        let data = store.get("amazon/B001").await.unwrap();

        assert_eq!(data, br#"{"ASIN":"B001"}"#.to_vec());
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_key_is_not_found() {
        let rule = mock!(Client::get_object)
            .then_error(|| GetObjectError::NoSuchKey(NoSuchKey::builder().build()));
        let store = S3BlobStore::new(mock_client!(aws_sdk_s3, [&rule]), "items");

        let err = store.get("amazon/B404").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, BlobStoreError::NotFound(ref key) if key == "amazon/B404"));
    }

    #[tokio::test]
    async fn test_get_access_denied_is_backend_error() {
        let rule =
            mock!(Client::get_object).then_error(|| GetObjectError::generic(access_denied()));
        let store = S3BlobStore::new(mock_client!(aws_sdk_s3, [&rule]), "items");

        let err = store.get("amazon/B001").await.unwrap_err();

        assert!(!err.is_not_found());
        assert!(matches!(err, BlobStoreError::Backend(ref msg) if msg.contains("AccessDenied")));
    }

    #[tokio::test]
    async fn test_put_sends_bytes_under_key() {
        let rule = mock!(Client::put_object)
            .match_requests(|req| {
                req.bucket() == Some("items") && req.key() == Some("amazon/B001")
            })
            .then_output(|| PutObjectOutput::builder().build());
        let store = S3BlobStore::new(mock_client!(aws_sdk_s3, [&rule]), "items");

        store.put("amazon/B001", b"{}").await.unwrap();

        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_put_failure_is_backend_error() {
        let rule =
            mock!(Client::put_object).then_error(|| PutObjectError::generic(access_denied()));
        let store = S3BlobStore::new(mock_client!(aws_sdk_s3, [&rule]), "items");

        let err = store.put("amazon/B001", b"{}").await.unwrap_err();

        assert!(matches!(err, BlobStoreError::Backend(ref msg) if msg.contains("AccessDenied")));
    }
}
