use std::sync::Arc;

use folio_core::forms::ContactForm;
use folio_core::types::DocumentId;
use folio_db::models::message::Message;
use folio_db::repositories::MessageRepo;
use folio_db::{DocumentStore, StoreError};

use super::state::{Phase, Snapshot, SyncedState};

/// Contact messages, newest first.
pub struct MessagesCollection {
    store: Arc<dyn DocumentStore>,
    state: SyncedState<Vec<Message>>,
}

impl MessagesCollection {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            state: SyncedState::new("messages"),
        }
    }

    pub async fn activate(&self) {
        self.state.activate(|| self.fetch()).await;
    }

    pub async fn fetch(&self) {
        self.state.sync(MessageRepo::list(self.store.as_ref())).await;
    }

    pub async fn snapshot(&self) -> Snapshot<Vec<Message>> {
        self.state.snapshot().await
    }

    pub async fn phase(&self) -> Phase {
        self.state.phase().await
    }

    pub async fn unread_count(&self) -> usize {
        self.state.data().await.iter().filter(|m| !m.read).count()
    }

    /// Store a contact submission. Callers validate and sanitize first.
    pub async fn add(&self, form: &ContactForm) -> Result<DocumentId, StoreError> {
        let id = MessageRepo::create(self.store.as_ref(), form)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error adding message"))?;
        tracing::info!(id = %id, "Message received");
        self.fetch().await;
        Ok(id)
    }

    pub async fn mark_as_read(&self, id: &str) -> Result<(), StoreError> {
        MessageRepo::mark_as_read(self.store.as_ref(), id)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error marking message as read"))?;
        self.fetch().await;
        Ok(())
    }

    /// Mark every unread message in the current snapshot as read, then
    /// re-sync once. A failure on one message is logged and does not stop
    /// the others. Returns how many were marked.
    pub async fn mark_all_read(&self) -> usize {
        let unread: Vec<DocumentId> = self
            .state
            .data()
            .await
            .into_iter()
            .filter(|m| !m.read)
            .map(|m| m.id)
            .collect();

        let mut marked = 0;
        for id in &unread {
            match MessageRepo::mark_as_read(self.store.as_ref(), id).await {
                Ok(()) => marked += 1,
                Err(e) => tracing::error!(id = %id, error = %e, "Error marking message as read"),
            }
        }
        if !unread.is_empty() {
            self.fetch().await;
        }
        marked
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        MessageRepo::delete(self.store.as_ref(), id)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error deleting message"))?;
        self.fetch().await;
        Ok(())
    }
}
