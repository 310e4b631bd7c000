//! Key-value blob storage
//!
//! A small get/put-by-key abstraction over byte blobs. Reads distinguish a
//! missing key ([`BlobStoreError::NotFound`]) from every other failure so that
//! callers using the store as a read-through cache can tell a miss apart from
//! a broken backend.
//!
//! Backends:
//! - [`S3BlobStore`] - objects in a single S3 bucket
//! - [`FileBlobStore`] - files under a root directory
//! - [`MemoryBlobStore`] - a process-local map, mostly for tests

mod error;
mod file;
mod memory;
mod s3;

pub use error::{BlobStoreError, Result};
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

use async_trait::async_trait;

/// A byte store addressed by string keys
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the blob stored under `key`
    ///
    /// Returns [`BlobStoreError::NotFound`] when nothing is stored there.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Store `data` under `key`, replacing any previous blob
    async fn put(&self, key: &str, data: &[u8]) -> Result<()>;
}
