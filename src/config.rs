//! Client configuration
//!
//! Settings can come from YAML (string or file), from environment
//! variables, or from [`Default`].

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Environment variable overriding the API root
pub const ENV_BASE_URL: &str = "SWAPI_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "SWAPI_TIMEOUT_SECS";

/// Configuration for [`SwapiClient`](crate::SwapiClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `https://swapi.dev/api`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent string
    pub user_agent: String,

    /// Headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("swapi-client/{}", env!("CARGO_PKG_VERSION")),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Parse from a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml_str(&content)
    }

    /// Defaults overridden by `SWAPI_BASE_URL` and `SWAPI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be an integer, got '{timeout}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the base URL and timeout
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }

        Ok(())
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP client configuration
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .user_agent(&self.user_agent);

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}
