//! Snapshot state shared by every synchronized collection.
//!
//! A [`SyncedState`] holds the last applied read of a collection plus a
//! loading flag and an error message. Reads are ticketed: each call to
//! [`SyncedState::sync`] takes the next ticket before it starts, and its
//! result is applied only if no later-started read has already been applied.
//! A slow read can therefore never overwrite a newer one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use folio_db::StoreError;
use serde::Serialize;
use tokio::sync::{OnceCell, RwLock};

/// Lifecycle of a collection snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Never read.
    Idle,
    /// At least one read is in flight.
    Loading,
    /// The last applied read succeeded.
    Loaded,
    /// The last applied read failed. Earlier data is retained.
    Failed,
}

/// Copy of a collection's state handed out to callers.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner<T> {
    data: T,
    error: Option<String>,
    loaded: bool,
    applied_ticket: u64,
}

/// Counts one read as in flight until dropped, so a cancelled read still
/// clears the loading flag.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Ticketed snapshot of one collection.
pub struct SyncedState<T> {
    entity: &'static str,
    inner: RwLock<Inner<T>>,
    next_ticket: AtomicU64,
    in_flight: AtomicUsize,
    activated: OnceCell<()>,
}

impl<T> SyncedState<T>
where
    T: Clone + Default + Send + Sync,
{
    /// `entity` names the collection in error messages and logs.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            inner: RwLock::new(Inner::default()),
            next_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            activated: OnceCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.read().await;
        Snapshot {
            data: inner.data.clone(),
            loading: self.is_loading(),
            error: inner.error.clone(),
        }
    }

    pub async fn data(&self) -> T {
        self.inner.read().await.data.clone()
    }

    pub async fn phase(&self) -> Phase {
        let inner = self.inner.read().await;
        if self.is_loading() {
            Phase::Loading
        } else if inner.error.is_some() {
            Phase::Failed
        } else if inner.loaded {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Run `first_fetch` exactly once over the lifetime of the state.
    /// Concurrent callers wait for the first fetch to finish.
    pub async fn activate<F, Fut>(&self, first_fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.activated.get_or_init(first_fetch).await;
    }

    /// Await `read` and apply its result under the ticket rule.
    ///
    /// On failure the error is logged and the collection error is set to
    /// `"Failed to fetch <entity>"`; existing data is kept. The loading flag
    /// clears once no read is in flight, whatever the outcome.
    pub async fn sync<Fut>(&self, read: Fut)
    where
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let _in_flight = InFlight::enter(&self.in_flight);

        let result = read.await;

        let mut inner = self.inner.write().await;
        if ticket < inner.applied_ticket {
            tracing::debug!(entity = self.entity, ticket, "Discarding stale read");
            return;
        }
        inner.applied_ticket = ticket;
        match result {
            Ok(data) => {
                inner.data = data;
                inner.error = None;
                inner.loaded = true;
            }
            Err(e) => {
                tracing::error!(entity = self.entity, error = %e, "Error fetching collection");
                inner.error = Some(format!("Failed to fetch {}", self.entity));
            }
        }
    }
}
