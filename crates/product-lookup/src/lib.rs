//! Product metadata lookup with a read-through blob cache
//!
//! Given an ASIN, returns normalized product metadata. The blob store is
//! checked first; on a miss the Product Advertising API is queried, the first
//! record is flattened into an [`Item`](item::Item) and written back to the
//! store. Cache failures are logged and never fail a request.

pub mod config;
pub mod error;
pub mod handler;
pub mod item;
pub mod normalize;
pub mod request;
pub mod resolver;
pub mod server;

#[cfg(test)]
mod test_support;
