//! Transport seam
//!
//! The pagination and lookup layers only talk to upstream through the
//! [`Transport`] trait. [`HttpTransport`] is the default implementation,
//! built on [`HttpClient`].

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{JsonObject, JsonValue, ResourceKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A decoded list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    /// Total number of items in the collection
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page, in upstream order
    #[serde(default)]
    pub results: Vec<JsonObject>,
}

impl ListPage {
    /// Create a page with the given count and items
    pub fn new(count: u64, results: Vec<JsonObject>) -> Self {
        Self {
            count,
            results,
            ..Default::default()
        }
    }

    /// Items on this page
    pub fn items(&self) -> &[JsonObject] {
        &self.results
    }
}

/// Upstream access used by the core
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a list page. `None` asks for the count and first page.
    async fn fetch_list(&self, kind: ResourceKind, page: Option<u32>) -> Result<ListPage>;

    /// Fetch a single item by identifier
    async fn fetch_item(&self, kind: ResourceKind, id: u32) -> Result<JsonObject>;
}

/// Transport that talks to the SWAPI REST endpoints over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    /// Create a transport on top of a configured client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_list(&self, kind: ResourceKind, page: Option<u32>) -> Result<ListPage> {
        let url = format!("/{}/", kind.path());
        let mut config = RequestConfig::new();
        if let Some(page) = page {
            config = config.query("page", page.to_string());
        }

        debug!(%kind, ?page, "Fetching list page");
        let body: JsonValue = self.client.get_json_with_config(&url, config).await?;
        decode_list_page(body)
    }

    async fn fetch_item(&self, kind: ResourceKind, id: u32) -> Result<JsonObject> {
        let url = format!("/{}/{}/", kind.path(), id);

        debug!(%kind, id, "Fetching item");
        let body: JsonValue = self.client.get_json(&url).await?;
        match body {
            JsonValue::Object(map) => Ok(map),
            other => Err(Error::decode(format!(
                "Expected a JSON object for {kind} {id}, got {other}"
            ))),
        }
    }
}

/// Decode a list payload, requiring a numeric `count`
fn decode_list_page(body: JsonValue) -> Result<ListPage> {
    if !body.get("count").is_some_and(JsonValue::is_u64) {
        return Err(Error::decode("List response has no numeric 'count' field"));
    }
    Ok(serde_json::from_value(body)?)
}
