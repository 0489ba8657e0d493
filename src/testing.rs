//! In-memory transport for unit tests

use crate::error::{Error, Result};
use crate::transport::{ListPage, Transport};
use crate::types::{JsonObject, JsonValue, ResourceKind};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// A transport call, as recorded by [`StubTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    List(ResourceKind, Option<u32>),
    Item(ResourceKind, u32),
}

/// Serves fixed items per kind, split into pages of `page_size`
#[derive(Default)]
pub(crate) struct StubTransport {
    items: HashMap<ResourceKind, Vec<JsonObject>>,
    page_size: usize,
    failing_pages: HashSet<(ResourceKind, u32)>,
    failing_counts: HashSet<ResourceKind>,
    count_override: HashMap<ResourceKind, u64>,
    calls: Mutex<Vec<Call>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self {
            page_size: 1,
            ..Default::default()
        }
    }

    pub(crate) fn with_items(mut self, kind: ResourceKind, items: Vec<JsonValue>) -> Self {
        let items = items
            .into_iter()
            .map(|v| match v {
                JsonValue::Object(map) => map,
                other => panic!("Stub items must be objects, got {other}"),
            })
            .collect();
        self.items.insert(kind, items);
        self
    }

    pub(crate) fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub(crate) fn failing_page(mut self, kind: ResourceKind, page: u32) -> Self {
        self.failing_pages.insert((kind, page));
        self
    }

    pub(crate) fn failing_count(mut self, kind: ResourceKind) -> Self {
        self.failing_counts.insert(kind);
        self
    }

    /// Report a count that differs from the number of items served
    pub(crate) fn with_count(mut self, kind: ResourceKind, count: u64) -> Self {
        self.count_override.insert(kind, count);
        self
    }

    pub(crate) fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count_calls(&self, kind: ResourceKind) -> usize {
        self.calls()
            .iter()
            .filter(|c| **c == Call::List(kind, None))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn page(&self, kind: ResourceKind, page: u32) -> Vec<JsonObject> {
        let items = self.items.get(&kind).map(Vec::as_slice).unwrap_or_default();
        let start = (page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        items.get(start..end).map(<[_]>::to_vec).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch_list(&self, kind: ResourceKind, page: Option<u32>) -> Result<ListPage> {
        self.record(Call::List(kind, page));

        let count = self.count_override.get(&kind).copied().unwrap_or_else(|| {
            self.items.get(&kind).map_or(0, |items| items.len() as u64)
        });

        match page {
            None if self.failing_counts.contains(&kind) => {
                Err(Error::http_status(503, "count unavailable"))
            }
            None => Ok(ListPage::new(count, self.page(kind, 1))),
            Some(n) if self.failing_pages.contains(&(kind, n)) => {
                Err(Error::http_status(500, format!("page {n} failed")))
            }
            Some(n) => Ok(ListPage::new(count, self.page(kind, n))),
        }
    }

    async fn fetch_item(&self, kind: ResourceKind, id: u32) -> Result<JsonObject> {
        self.record(Call::Item(kind, id));

        self.items
            .get(&kind)
            .and_then(|items| items.get((id as usize).checked_sub(1)?))
            .cloned()
            .ok_or_else(|| Error::http_status(404, "Not found"))
    }
}
