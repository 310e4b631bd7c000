//! Test doubles for the blob store and the remote lookup

use async_trait::async_trait;
use blob_store::{BlobStore, BlobStoreError};
use product_advertising_client::{
    Item as Record, ItemAttributes, ItemLookup, ItemLookupResponse, LookupParams,
    ProductAdvertisingError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store that counts calls and can be told to fail
#[derive(Default)]
pub struct RecordingStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_reads: bool,
    fail_writes: bool,
    reads: AtomicUsize,
    writes: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(self, key: &str, data: &[u8]) -> Self {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        self
    }

    /// Every read fails with a permission-style backend error
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write fails after being recorded
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Attempted writes, successful or not
    pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for RecordingStore {
    async fn get(&self, key: &str) -> blob_store::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(BlobStoreError::Backend("AccessDenied: Access Denied".to_string()));
        }
        self.blobs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| BlobStoreError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, data: &[u8]) -> blob_store::Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), data.to_vec()));
        if self.fail_writes {
            return Err(BlobStoreError::Backend("SlowDown: Please reduce your request rate".to_string()));
        }
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

/// Remote lookup returning canned records or a canned failure
pub struct StubLookup {
    outcome: Result<Vec<Record>, String>,
    calls: Mutex<Vec<LookupParams>>,
}

impl StubLookup {
    pub fn returning(records: Vec<Record>) -> Self {
        Self {
            outcome: Ok(records),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<LookupParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemLookup for StubLookup {
    async fn item_lookup(
        &self,
        params: &LookupParams,
    ) -> product_advertising_client::Result<ItemLookupResponse> {
        self.calls.lock().unwrap().push(params.clone());
        match &self.outcome {
            Ok(records) => Ok(ItemLookupResponse::with_items(records.clone())),
            Err(msg) => Err(ProductAdvertisingError::ApiError(msg.clone())),
        }
    }
}

/// `{ASIN: B001, ItemAttributes: {Title: Widget}, DetailPageURL: http://x/B001}`
pub fn widget_record() -> Record {
    Record {
        asin: Some("B001".to_string()),
        detail_page_url: Some("http://x/B001".to_string()),
        item_attributes: Some(ItemAttributes {
            title: Some("Widget".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub const WIDGET_JSON: &str = r#"{"ASIN":"B001","Brand":"","Creator":"","Manufacturer":"","Publisher":"","ReleaseDate":"","Studio":"","Title":"Widget","URL":"http://x/B001","SmallImage":"","MediumImage":"","LargeImage":""}"#;
