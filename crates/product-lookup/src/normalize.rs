//! Mapping of lookup responses onto [`Item`]

use crate::item::Item;
use product_advertising_client::{Image, ItemLookupResponse};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The response contains no records
    EmptyResult,
    /// The first record has no ASIN
    MissingIdentifier,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyResult => write!(f, "empty amazon items"),
            Self::MissingIdentifier => write!(f, "item has no ASIN"),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Flatten the first record of `response` into an [`Item`]
///
/// Later records are ignored. Missing attributes become empty strings; when
/// several creators are listed the first one is kept.
pub fn normalize(response: &ItemLookupResponse) -> Result<Item, NormalizeError> {
    let record = response
        .records()
        .first()
        .ok_or(NormalizeError::EmptyResult)?;

    let asin = record.asin.clone().unwrap_or_default();
    if asin.is_empty() {
        return Err(NormalizeError::MissingIdentifier);
    }

    let attrs = record.item_attributes.clone().unwrap_or_default();

    Ok(Item {
        asin,
        brand: attrs.brand.unwrap_or_default(),
        creator: attrs
            .creator
            .into_iter()
            .next()
            .map(|c| c.name)
            .unwrap_or_default(),
        manufacturer: attrs.manufacturer.unwrap_or_default(),
        publisher: attrs.publisher.unwrap_or_default(),
        release_date: attrs.release_date.unwrap_or_default(),
        studio: attrs.studio.unwrap_or_default(),
        title: attrs.title.unwrap_or_default(),
        url: record.detail_page_url.clone().unwrap_or_default(),
        small_image: image_url(&record.small_image),
        medium_image: image_url(&record.medium_image),
        large_image: image_url(&record.large_image),
    })
}

fn image_url(image: &Option<Image>) -> String {
    image
        .as_ref()
        .and_then(|i| i.url.clone())
        .unwrap_or_default()
}
