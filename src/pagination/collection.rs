//! Lazy, count-aware sequence over a paginated resource
//!
//! Pages are requested one at a time, exactly when the consumer asks for the
//! next record. At most one page of items is held in memory.

use super::types::PassState;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::transport::Transport;
use crate::types::{JsonObject, ResourceKind};
use futures::stream::{self, Stream};
use std::borrow::BorrowMut;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Paginated collection of records of one kind
pub struct PagedCollection {
    transport: Arc<dyn Transport>,
    kind: ResourceKind,
    total_count: Option<u64>,
    /// Items produced in the current pass
    cursor: u64,
    /// Pages requested in the current pass
    pages_fetched: u32,
    /// Unconsumed items of the last fetched page
    buffer: VecDeque<JsonObject>,
    state: PassState,
}

impl PagedCollection {
    /// Create a collection. No request is made until it is counted or iterated.
    pub fn new(transport: Arc<dyn Transport>, kind: ResourceKind) -> Self {
        Self {
            transport,
            kind,
            total_count: None,
            cursor: 0,
            pages_fetched: 0,
            buffer: VecDeque::new(),
            state: PassState::Uninitialized,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Total count, if it has been resolved
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == PassState::Exhausted
    }

    /// Total number of items.
    ///
    /// Resolved with one list request the first time and cached on this
    /// instance afterwards. Starting a pass refreshes it.
    pub async fn count(&mut self) -> Result<u64> {
        if let Some(total) = self.total_count {
            return Ok(total);
        }

        let page = self.transport.fetch_list(self.kind, None).await?;
        debug!(kind = %self.kind, count = page.count, "Resolved collection count");
        self.total_count = Some(page.count);
        Ok(page.count)
    }

    /// Begin a fresh pass: re-resolve the count and rewind the cursor
    pub async fn start(&mut self) -> Result<()> {
        self.state = PassState::Counting;
        self.cursor = 0;
        self.pages_fetched = 0;
        self.buffer.clear();

        match self.transport.fetch_list(self.kind, None).await {
            Ok(page) => {
                debug!(kind = %self.kind, count = page.count, "Starting pass");
                self.total_count = Some(page.count);
                self.state = PassState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "Failed to start pass");
                self.state = PassState::Failed;
                Err(e)
            }
        }
    }

    /// Produce the next record of the current pass.
    ///
    /// Starts a pass first if none has been started. Returns `Ok(None)` once
    /// the pass is exhausted or has failed; only [`start`](Self::start) leaves
    /// those states.
    pub async fn advance(&mut self) -> Result<Option<Record>> {
        match self.state {
            PassState::Uninitialized => self.start().await?,
            PassState::Ready => {}
            PassState::Exhausted | PassState::Failed => return Ok(None),
            PassState::Counting | PassState::Producing => {
                self.state = PassState::Failed;
                return Ok(None);
            }
        }

        let total = self.total_count.unwrap_or(0);
        if self.cursor >= total {
            self.buffer.clear();
            self.state = PassState::Exhausted;
            return Ok(None);
        }

        self.state = PassState::Producing;
        match self.next_item().await {
            Ok(item) => {
                self.cursor += 1;
                self.state = PassState::Ready;
                Ok(Some(Record::new(self.kind, item)))
            }
            Err(e) => {
                warn!(
                    kind = %self.kind,
                    cursor = self.cursor,
                    error = %e,
                    "Pass aborted"
                );
                self.buffer.clear();
                self.state = PassState::Failed;
                Err(e)
            }
        }
    }

    /// Stream a fresh pass over the collection, keeping it for later passes
    pub fn stream(&mut self) -> impl Stream<Item = Result<Record>> + Send + '_ {
        pass_stream(self)
    }

    /// Stream a fresh pass over the collection, consuming it
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> + Send {
        pass_stream(self)
    }

    async fn next_item(&mut self) -> Result<JsonObject> {
        if let Some(item) = self.buffer.pop_front() {
            return Ok(item);
        }

        let page_number = self.pages_fetched + 1;
        let page = self
            .transport
            .fetch_list(self.kind, Some(page_number))
            .await?;
        self.pages_fetched = page_number;
        self.buffer.extend(page.results);

        self.buffer.pop_front().ok_or(Error::EmptyPage {
            kind: self.kind,
            page: page_number,
        })
    }
}

impl std::fmt::Debug for PagedCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedCollection")
            .field("kind", &self.kind)
            .field("total_count", &self.total_count)
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// One pass as a stream: start, then advance until exhausted.
/// A failure is yielded once and ends the stream.
fn pass_stream<C>(collection: C) -> impl Stream<Item = Result<Record>> + Send
where
    C: BorrowMut<PagedCollection> + Send,
{
    stream::unfold((collection, false), |(mut collection, started)| async move {
        if !started {
            if let Err(e) = collection.borrow_mut().start().await {
                return Some((Err(e), (collection, true)));
            }
        }

        match collection.borrow_mut().advance().await {
            Ok(Some(record)) => Some((Ok(record), (collection, true))),
            Ok(None) => None,
            Err(e) => Some((Err(e), (collection, true))),
        }
    })
}
