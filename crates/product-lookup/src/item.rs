//! Normalized product record and its cache key

use serde::{Deserialize, Serialize};

/// Key prefix under which items are cached
pub const CACHE_NAMESPACE: &str = "amazon";

/// Blob store key for an item id
pub fn cache_key(item_id: &str) -> String {
    format!("{}/{}", CACHE_NAMESPACE, item_id)
}

/// Flat product metadata returned to callers
///
/// Every field is always present in the JSON form; values missing upstream
/// are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Creator")]
    pub creator: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "ReleaseDate")]
    pub release_date: String,
    #[serde(rename = "Studio")]
    pub studio: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "SmallImage")]
    pub small_image: String,
    #[serde(rename = "MediumImage")]
    pub medium_image: String,
    #[serde(rename = "LargeImage")]
    pub large_image: String,
}
