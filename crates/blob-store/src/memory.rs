//! In-memory blob store

use crate::error::{BlobStoreError, Result};
use crate::BlobStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Blob store backed by a process-local map
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| BlobStoreError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
