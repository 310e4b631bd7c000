//! Error types for the product lookup handler

use axum::http::StatusCode;
use std::fmt;

/// Errors surfaced to the invoking host
///
/// The `Display` form starts with a category token (`BadRequest:` or
/// `InternalError:`) so a gateway can map the message to a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The inbound event carries no usable item id
    BadRequest(String),
    /// Remote lookup, normalization or serialization failed
    Internal(String),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
            HandlerError::Internal(msg) => write!(f, "InternalError: {}", msg),
        }
    }
}

impl std::error::Error for HandlerError {}

/// Errors raised while reading configuration at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    Missing(&'static str),
    /// `domain` names no known marketplace
    InvalidLocale(String),
    /// `PORT` is not a valid port number
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "Configuration error: {} is not set", var),
            ConfigError::InvalidLocale(value) => {
                write!(f, "Configuration error: unknown domain {:?}", value)
            }
            ConfigError::InvalidPort(value) => {
                write!(f, "Configuration error: invalid PORT {:?}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, HandlerError>;
