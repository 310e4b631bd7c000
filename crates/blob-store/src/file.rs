//! Filesystem blob store
//!
//! Each key maps to a file at the same relative path under the root
//! directory, so `amazon/B001` lives at `<root>/amazon/B001`.

use crate::error::{BlobStoreError, Result};
use crate::BlobStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Blob store that keeps one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a path inside the root
    ///
    /// Only plain relative components are accepted; anything that could
    /// escape the root is rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let mut components = relative.components().peekable();
        if components.peek().is_none() {
            return Err(BlobStoreError::InvalidKey(key.to_string()));
        }
        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(BlobStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(data) => {
                debug!(key, size = data.len(), "Read blob from disk");
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(BlobStoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, data).await?;
        debug!(key, size = data.len(), "Wrote blob to disk");
        Ok(())
    }
}
