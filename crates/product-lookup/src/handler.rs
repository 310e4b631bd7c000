//! Lambda entry point and process-wide services

use crate::config::{CacheBackend, HandlerConfig};
use crate::error::Result;
use crate::request::parse_event;
use crate::resolver::Resolver;
use blob_store::{BlobStore, FileBlobStore, S3BlobStore};
use product_advertising_client::{ItemLookup, ProductAdvertisingClient};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Response returned to the Lambda host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaResponse {
    /// JSON-encoded item
    pub body: String,
}

/// Clients built once per process and shared by every invocation
pub struct Services {
    store: Arc<dyn BlobStore>,
    lookup: Arc<dyn ItemLookup>,
}

impl Services {
    pub fn new(store: Arc<dyn BlobStore>, lookup: Arc<dyn ItemLookup>) -> Self {
        Self { store, lookup }
    }

    pub async fn init(config: &HandlerConfig) -> Self {
        let store: Arc<dyn BlobStore> = match &config.cache {
            CacheBackend::S3 { bucket, region } => {
                Arc::new(S3BlobStore::from_env(region.clone(), bucket.clone()).await)
            }
            CacheBackend::Directory(dir) => Arc::new(FileBlobStore::new(dir.clone())),
        };
        let lookup = Arc::new(ProductAdvertisingClient::new(
            config.locale,
            config.credentials.clone(),
        ));

        Self::new(store, lookup)
    }

    /// A fresh resolver for one invocation
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.store.as_ref(), self.lookup.as_ref())
    }
}

/// Handle one inbound event
pub async fn handle_event(resolver: &Resolver<'_>, event: Value) -> Result<LambdaResponse> {
    info!(event = %event, "Received event");

    let item_id = parse_event(&event)?;
    let resolution = resolver.resolve(item_id.as_str()).await?;

    // Cached bytes are returned as-is; invalid sequences become U+FFFD
    let body = String::from_utf8_lossy(&resolution.body).into_owned();

    info!(
        item_id = %item_id,
        source = ?resolution.source,
        json = %body,
        "Resolved item"
    );

    Ok(LambdaResponse { body })
}
