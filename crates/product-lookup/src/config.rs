use crate::error::ConfigError;
use product_advertising_client::{Credentials, Locale};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3005;

/// Where looked-up items are cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    S3 {
        bucket: String,
        region: Option<String>,
    },
    /// Local directory, for running outside AWS
    Directory(PathBuf),
}

/// Handler configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    pub cache: CacheBackend,
    pub credentials: Credentials,
    pub locale: Locale,
    /// Port of the local HTTP server; unused under Lambda
    pub port: u16,
}

impl HandlerConfig {
    /// Parse configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from an arbitrary variable source
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let cache = match var("CACHE_DIR") {
            Some(dir) => CacheBackend::Directory(PathBuf::from(dir)),
            None => CacheBackend::S3 {
                bucket: required("bucket")?,
                region: var("AWS_REGION"),
            },
        };

        let credentials = Credentials {
            access_key: required("access")?,
            secret_key: required("secret")?,
            associate_tag: required("tag")?,
        };

        let locale = match var("domain") {
            Some(domain) => domain
                .parse::<Locale>()
                .map_err(|_| ConfigError::InvalidLocale(domain))?,
            None => Locale::default(),
        };

        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            cache,
            credentials,
            locale,
            port,
        })
    }
}
