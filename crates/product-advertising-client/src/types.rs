//! Data types for Product Advertising API requests and responses
//!
//! Response structs mirror the `ItemLookupResponse` XML document. Only the
//! elements this crate exposes are modelled; everything else in the document
//! is skipped during deserialization. Every field is optional because the API
//! omits elements that have no value for a given product.

use serde::Deserialize;

/// Parameters of an `ItemLookup` by ASIN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupParams {
    pub item_id: String,
}

impl LookupParams {
    pub const OPERATION: &'static str = "ItemLookup";
    pub const ID_TYPE: &'static str = "ASIN";
    pub const RESPONSE_GROUP: &'static str = "Large";

    /// Look up a single ASIN with the `Large` response group
    pub fn by_asin(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }

    /// Operation parameters, before authentication parameters are added
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IdType", Self::ID_TYPE.to_string()),
            ("ItemId", self.item_id.clone()),
            ("Operation", Self::OPERATION.to_string()),
            ("ResponseGroup", Self::RESPONSE_GROUP.to_string()),
        ]
    }
}

/// Root of a successful `ItemLookup` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemLookupResponse {
    #[serde(rename = "Items", default)]
    pub items: Items,
}

impl ItemLookupResponse {
    /// Convenience constructor for a response carrying the given records
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Items {
                request: None,
                item: items,
            },
        }
    }

    /// Matching records, in API order
    pub fn records(&self) -> &[Item] {
        &self.items.item
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Items {
    #[serde(rename = "Request", default)]
    pub request: Option<RequestInfo>,
    #[serde(rename = "Item", default)]
    pub item: Vec<Item>,
}

/// Echo of the request, including validation errors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestInfo {
    #[serde(rename = "IsValid", default)]
    pub is_valid: Option<String>,
    #[serde(rename = "Errors", default)]
    pub errors: Option<Errors>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Errors {
    #[serde(rename = "Error", default)]
    pub error: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

/// Root of an error response (`ItemLookupErrorResponse`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<ErrorDetail>,
}

/// A single product record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(rename = "ASIN", default)]
    pub asin: Option<String>,
    #[serde(rename = "DetailPageURL", default)]
    pub detail_page_url: Option<String>,
    #[serde(rename = "SmallImage", default)]
    pub small_image: Option<Image>,
    #[serde(rename = "MediumImage", default)]
    pub medium_image: Option<Image>,
    #[serde(rename = "LargeImage", default)]
    pub large_image: Option<Image>,
    #[serde(rename = "ItemAttributes", default)]
    pub item_attributes: Option<ItemAttributes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemAttributes {
    #[serde(rename = "Brand", default)]
    pub brand: Option<String>,
    #[serde(rename = "Creator", default)]
    pub creator: Vec<Creator>,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "Publisher", default)]
    pub publisher: Option<String>,
    #[serde(rename = "ReleaseDate", default)]
    pub release_date: Option<String>,
    #[serde(rename = "Studio", default)]
    pub studio: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
}

/// `<Creator Role="...">name</Creator>`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Creator {
    #[serde(rename = "@Role", default)]
    pub role: Option<String>,
    #[serde(rename = "$text", default)]
    pub name: String,
}
