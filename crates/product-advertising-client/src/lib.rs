//! Rust client for the Amazon Product Advertising API
//!
//! Covers the `ItemLookup` operation: looking up a product by ASIN and
//! decoding the returned `ItemLookupResponse` document into typed records.
//!
//! # Example
//!
//! ```no_run
//! use product_advertising_client::{
//!     Credentials, ItemLookup, Locale, LookupParams, ProductAdvertisingClient,
//! };
//!
//! # async fn example() -> Result<(), product_advertising_client::ProductAdvertisingError> {
//! let client = ProductAdvertisingClient::new(
//!     Locale::JP,
//!     Credentials {
//!         access_key: "AKID".to_string(),
//!         secret_key: "secret".to_string(),
//!         associate_tag: "tag-22".to_string(),
//!     },
//! );
//!
//! let response = client.item_lookup(&LookupParams::by_asin("B00005N5PF")).await?;
//! for item in response.records() {
//!     println!("{:?}", item.asin);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod locale;
mod signer;
mod types;

pub use client::{parse_response, Credentials, ProductAdvertisingClient};
pub use error::{ProductAdvertisingError, Result};
pub use locale::Locale;
pub use types::{
    Creator, ErrorDetail, ErrorResponse, Errors, Image, Item, ItemAttributes, ItemLookupResponse,
    Items, LookupParams, RequestInfo,
};

use async_trait::async_trait;

/// Anything that can answer an `ItemLookup`
///
/// Implemented by [`ProductAdvertisingClient`]; callers depend on the trait so
/// the remote API can be replaced in tests.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    async fn item_lookup(&self, params: &LookupParams) -> Result<ItemLookupResponse>;
}
