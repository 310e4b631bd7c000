//! Product Advertising API HTTP client

use crate::error::{ProductAdvertisingError, Result};
use crate::locale::Locale;
use crate::signer;
use crate::types::{ErrorResponse, ItemLookupResponse, LookupParams};
use crate::ItemLookup;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Credentials identifying the caller and the partner tag to attribute
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub associate_tag: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("associate_tag", &self.associate_tag)
            .finish()
    }
}

/// Client for the Product Advertising API
///
/// Requests are signed with Signature Version 2 and sent to the endpoint of
/// the configured marketplace. No retries are attempted and no timeout is set
/// here; the hosting environment bounds the request.
pub struct ProductAdvertisingClient {
    http: reqwest::Client,
    locale: Locale,
    credentials: Credentials,
}

impl ProductAdvertisingClient {
    pub const SERVICE: &'static str = "AWSECommerceService";
    pub const API_VERSION: &'static str = "2013-08-01";
    pub const PATH: &'static str = "/onca/xml";

    pub fn new(locale: Locale, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            locale,
            credentials,
        }
    }

    /// Build the signed request URL for `params` at `timestamp`
    pub fn signed_url(&self, params: &LookupParams, timestamp: DateTime<Utc>) -> Result<String> {
        let mut query: BTreeMap<String, String> = params
            .query_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        query.insert("Service".into(), Self::SERVICE.into());
        query.insert("Version".into(), Self::API_VERSION.into());
        query.insert("AWSAccessKeyId".into(), self.credentials.access_key.clone());
        query.insert("AssociateTag".into(), self.credentials.associate_tag.clone());
        query.insert(
            "Timestamp".into(),
            timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );

        let host = self.locale.host();
        let canonical = signer::canonical_query(&query);
        let signature = signer::sign(
            &self.credentials.secret_key,
            &signer::string_to_sign(host, Self::PATH, &canonical),
        )?;

        Ok(format!(
            "https://{}{}?{}&Signature={}",
            host,
            Self::PATH,
            canonical,
            urlencoding::encode(&signature)
        ))
    }
}

#[async_trait]
impl ItemLookup for ProductAdvertisingClient {
    async fn item_lookup(&self, params: &LookupParams) -> Result<ItemLookupResponse> {
        let url = self.signed_url(params, Utc::now())?;
        debug!(item_id = %params.item_id, locale = %self.locale, "Sending ItemLookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = quick_xml::de::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or_else(|| format!("status {}", status));
            warn!(item_id = %params.item_id, status = %status, "ItemLookup rejected");
            return Err(ProductAdvertisingError::ApiError(detail));
        }

        parse_response(&body)
    }
}

/// Parse an `ItemLookupResponse` document
///
/// Validation errors echoed in `Items/Request/Errors` are turned into
/// [`ProductAdvertisingError::ApiError`].
pub fn parse_response(xml: &str) -> Result<ItemLookupResponse> {
    let response: ItemLookupResponse = quick_xml::de::from_str(xml)?;

    let first_error = response
        .items
        .request
        .as_ref()
        .and_then(|r| r.errors.as_ref())
        .and_then(|e| e.error.first());
    if let Some(err) = first_error {
        return Err(ProductAdvertisingError::ApiError(format!(
            "{}: {}",
            err.code, err.message
        )));
    }

    Ok(response)
}
