//! Error types for the Product Advertising API client

use std::fmt;

/// Errors that can occur when calling the Product Advertising API
#[derive(Debug)]
pub enum ProductAdvertisingError {
    /// HTTP request failed
    Http(Box<reqwest::Error>),
    /// Failed to parse the XML response
    Xml(quick_xml::DeError),
    /// Could not compute the request signature
    Signing(String),
    /// The API rejected the request
    ApiError(String),
    /// Locale code with no known endpoint
    UnknownLocale(String),
}

impl fmt::Display for ProductAdvertisingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Product Advertising HTTP error: {}", e),
            Self::Xml(e) => write!(f, "Product Advertising XML parse error: {}", e),
            Self::Signing(msg) => write!(f, "Request signing error: {}", msg),
            Self::ApiError(msg) => write!(f, "Product Advertising API error: {}", msg),
            Self::UnknownLocale(code) => write!(f, "Unknown locale: {}", code),
        }
    }
}

impl std::error::Error for ProductAdvertisingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProductAdvertisingError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<quick_xml::DeError> for ProductAdvertisingError {
    fn from(e: quick_xml::DeError) -> Self {
        Self::Xml(e)
    }
}

/// Result type for Product Advertising API operations
pub type Result<T> = std::result::Result<T, ProductAdvertisingError>;
