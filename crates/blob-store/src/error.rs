//! Error types for blob stores

use std::fmt;

#[derive(Debug)]
pub enum BlobStoreError {
    /// Nothing is stored under the key
    NotFound(String),
    /// The key cannot be mapped onto the backend
    InvalidKey(String),
    Io(Box<std::io::Error>),
    /// Any other backend failure (permissions, transport, body read)
    Backend(String),
}

impl BlobStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlobStoreError::NotFound(_))
    }
}

impl fmt::Display for BlobStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobStoreError::NotFound(key) => write!(f, "Blob not found: {}", key),
            BlobStoreError::InvalidKey(key) => write!(f, "Invalid blob key: {}", key),
            BlobStoreError::Io(err) => write!(f, "IO error: {}", err),
            BlobStoreError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for BlobStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlobStoreError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlobStoreError {
    fn from(err: std::io::Error) -> Self {
        BlobStoreError::Io(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BlobStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BlobStoreError::NotFound("amazon/B001".to_string());
        assert_eq!(format!("{}", err), "Blob not found: amazon/B001");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_backend_error_is_not_not_found() {
        let err = BlobStoreError::Backend("AccessDenied".to_string());
        assert!(!err.is_not_found());
        assert!(format!("{}", err).contains("AccessDenied"));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err = BlobStoreError::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }
}
