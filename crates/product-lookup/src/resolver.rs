//! Cache-aside item resolution
//!
//! Reads the blob cache first and only calls the Product Advertising API on a
//! miss. Cache failures never fail a request: they are logged and returned as
//! [`CacheWarning`]s next to the result, and the request carries on as if the
//! cache were empty.

use crate::error::{HandlerError, Result};
use crate::item::cache_key;
use crate::normalize::normalize;
use crate::request::ItemId;
use blob_store::BlobStore;
use product_advertising_client::{ItemLookup, LookupParams};
use tracing::{debug, info, warn};

/// Where a resolved body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Cache,
    Remote,
}

/// A cache failure that was absorbed instead of failing the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheWarning {
    ReadFailed { key: String, error: String },
    WriteFailed { key: String, error: String },
}

#[derive(Debug, Clone)]
pub struct Resolution {
    /// JSON-encoded item
    pub body: Vec<u8>,
    pub source: ResolutionSource,
    pub warnings: Vec<CacheWarning>,
}

/// Stateless resolver borrowing the store and lookup for one invocation
pub struct Resolver<'a> {
    store: &'a dyn BlobStore,
    lookup: &'a dyn ItemLookup,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn BlobStore, lookup: &'a dyn ItemLookup) -> Self {
        Self { store, lookup }
    }

    /// Resolve an item id to its JSON-encoded [`Item`](crate::item::Item)
    ///
    /// A cached body is returned as stored without further checks.
    pub async fn resolve(&self, item_id: &str) -> Result<Resolution> {
        let item_id = ItemId::parse(item_id)?;
        let key = cache_key(item_id.as_str());
        let mut warnings = Vec::new();

        match self.store.get(&key).await {
            Ok(body) => {
                debug!(item_id = %item_id, key = %key, "Cache hit");
                return Ok(Resolution {
                    body,
                    source: ResolutionSource::Cache,
                    warnings,
                });
            }
            Err(e) if e.is_not_found() => {
                debug!(item_id = %item_id, key = %key, "Cache miss");
            }
            Err(e) => {
                warn!(item_id = %item_id, key = %key, error = %e, "Failed to read cached item");
                warnings.push(CacheWarning::ReadFailed {
                    key,
                    error: e.to_string(),
                });
            }
        }

        let response = self
            .lookup
            .item_lookup(&LookupParams::by_asin(item_id.as_str()))
            .await
            .map_err(|e| {
                HandlerError::Internal(format!("failed to get item information: {}", e))
            })?;

        let item = normalize(&response).map_err(|e| {
            HandlerError::Internal(format!("failed to get item from response: {}", e))
        })?;

        let body = serde_json::to_vec(&item)
            .map_err(|e| HandlerError::Internal(format!("failed to marshal json: {}", e)))?;

        // Keyed by the record's own ASIN, which normally equals the request
        let write_key = cache_key(&item.asin);
        match self.store.put(&write_key, &body).await {
            Ok(()) => info!(item_id = %item_id, key = %write_key, "Cached item"),
            Err(e) => {
                warn!(item_id = %item_id, key = %write_key, error = %e, "Failed to cache item");
                warnings.push(CacheWarning::WriteFailed {
                    key: write_key,
                    error: e.to_string(),
                });
            }
        }

        Ok(Resolution {
            body,
            source: ResolutionSource::Remote,
            warnings,
        })
    }
}
