//! Inbound event parsing

use crate::error::{HandlerError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A non-empty product identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(HandlerError::BadRequest(format!(
                "invalid item id: {}",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize)]
struct InboundEvent {
    #[serde(rename = "queryStringParameters", default)]
    query_string_parameters: Option<QueryStringParameters>,
}

#[derive(Debug, Deserialize)]
struct QueryStringParameters {
    #[serde(default)]
    item_id: Option<String>,
}

/// Extract `queryStringParameters.item_id` from an inbound event
pub fn parse_event(event: &Value) -> Result<ItemId> {
    let parsed = InboundEvent::deserialize(event)
        .map_err(|e| HandlerError::BadRequest(format!("malformed event: {}", e)))?;

    let item_id = parsed
        .query_string_parameters
        .and_then(|q| q.item_id)
        .unwrap_or_default();

    ItemId::parse(&item_id)
}
