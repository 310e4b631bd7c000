//! AWS Signature Version 2 for Product Advertising API requests
//!
//! The canonical query is the request parameters sorted by key in byte
//! order, with keys and values percent-encoded per RFC 3986. The string to
//! sign is `GET\n<host>\n<path>\n<canonical query>`, signed with
//! HMAC-SHA256 and base64 encoded.

use crate::error::{ProductAdvertisingError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical query string from already sorted parameters
pub(crate) fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn string_to_sign(host: &str, path: &str, canonical: &str) -> String {
    format!("GET\n{}\n{}\n{}", host, path, canonical)
}

/// Base64 HMAC-SHA256 of `data` keyed by `secret`
pub(crate) fn sign(secret: &str, data: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ProductAdvertisingError::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
