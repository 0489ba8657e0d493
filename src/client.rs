//! Client facade
//!
//! [`SwapiClient`] is the entry point: single-item lookup, lazy collections
//! and counts, all routed through an injected [`Transport`].

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PagedCollection;
use crate::record::{Film, Person, Record};
use crate::transport::{HttpTransport, Transport};
use crate::types::ResourceKind;
use std::sync::Arc;
use tracing::instrument;

/// Star Wars API client
#[derive(Clone)]
pub struct SwapiClient {
    transport: Arc<dyn Transport>,
}

impl SwapiClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client that talks HTTP using the given configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.to_http_config())?;
        Ok(Self::new(Arc::new(HttpTransport::new(http))))
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Fetch one item by identifier
    #[instrument(skip(self))]
    pub async fn get(&self, kind: ResourceKind, id: u32) -> Result<Record> {
        let fields = self.transport.fetch_item(kind, id).await?;
        Ok(Record::new(kind, fields))
    }

    /// Fresh lazy collection over every item of a kind. No request is made yet.
    pub fn all(&self, kind: ResourceKind) -> PagedCollection {
        PagedCollection::new(Arc::clone(&self.transport), kind)
    }

    /// Total number of items of a kind
    #[instrument(skip(self))]
    pub async fn count(&self, kind: ResourceKind) -> Result<u64> {
        self.all(kind).count().await
    }

    /// Fetch a person by identifier
    pub async fn person(&self, id: u32) -> Result<Person> {
        let record = self.get(ResourceKind::Person, id).await?;
        Person::try_from(&record)
    }

    /// Fetch a film by identifier
    pub async fn film(&self, id: u32) -> Result<Film> {
        let record = self.get(ResourceKind::Film, id).await?;
        Film::try_from(&record)
    }

    pub fn people(&self) -> PagedCollection {
        self.all(ResourceKind::Person)
    }

    pub fn films(&self) -> PagedCollection {
        self.all(ResourceKind::Film)
    }
}

impl std::fmt::Debug for SwapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapiClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{Call, StubTransport};
    use futures::TryStreamExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn stub() -> Arc<StubTransport> {
        StubTransport::new()
            .with_items(
                ResourceKind::Person,
                vec![
                    json!({"name": "Luke Skywalker", "height": "172", "mass": "77"}),
                    json!({"name": "C-3PO"}),
                ],
            )
            .with_items(
                ResourceKind::Film,
                vec![json!({"title": "A"}), json!({"title": "B"}), json!({"title": "C"})],
            )
            .into_arc()
    }

    #[tokio::test]
    async fn test_get_makes_one_item_call() {
        let stub = stub();
        let client = SwapiClient::new(stub.clone());

        let record = client.get(ResourceKind::Person, 1).await.unwrap();

        assert_eq!(stub.calls(), vec![Call::Item(ResourceKind::Person, 1)]);
        assert_eq!(record.kind(), ResourceKind::Person);
        let names: BTreeSet<_> = record.field_names().collect();
        assert_eq!(names, BTreeSet::from(["height", "mass", "name"]));
    }

    #[tokio::test]
    async fn test_get_propagates_transport_error() {
        let stub = stub();
        let client = SwapiClient::new(stub.clone());

        let err = client.get(ResourceKind::Film, 42).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_all_is_lazy() {
        let stub = stub();
        let client = SwapiClient::new(stub.clone());

        let films = client.all(ResourceKind::Film);
        assert_eq!(films.kind(), ResourceKind::Film);
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_films_in_order_with_count_first() {
        let stub = stub();
        let client = SwapiClient::new(stub.clone());

        let mut films = client.films();
        assert_eq!(films.count().await.unwrap(), 3);
        assert_eq!(films.cursor(), 0);

        let titles: Vec<String> = films
            .stream()
            .map_ok(|r| r.label().unwrap().to_string())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_count_uses_fresh_collection() {
        let stub = stub();
        let client = SwapiClient::new(stub.clone());

        assert_eq!(client.count(ResourceKind::Person).await.unwrap(), 2);
        assert_eq!(client.count(ResourceKind::Person).await.unwrap(), 2);
        assert_eq!(stub.count_calls(ResourceKind::Person), 2);
    }

    #[tokio::test]
    async fn test_typed_shortcuts() {
        let client = SwapiClient::new(stub());

        let luke = client.person(1).await.unwrap();
        assert_eq!(luke.name.as_deref(), Some("Luke Skywalker"));
        assert_eq!(luke.height.as_deref(), Some("172"));

        let film = client.film(2).await.unwrap();
        assert_eq!(film.title.as_deref(), Some("B"));
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            SwapiClient::from_config(&config),
            Err(Error::InvalidUrl(_))
        ));
    }
}
