//! Repository for the `messages` collection.

use folio_core::forms::ContactForm;
use folio_core::types::DocumentId;

use crate::collections::MESSAGES;
use crate::document::{Fields, OrderBy};
use crate::error::StoreError;
use crate::models::message::Message;
use crate::models::ToFields;
use crate::store::DocumentStore;

/// Provides create, read-flag and delete operations for contact messages.
pub struct MessageRepo;

impl MessageRepo {
    /// List all messages, newest first.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Message>, StoreError> {
        let docs = store
            .query_collection(MESSAGES, Some(&OrderBy::desc("createdAt")))
            .await?;
        Ok(docs.iter().map(Message::from_document).collect())
    }

    /// Store a contact submission as unread.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &ContactForm,
    ) -> Result<DocumentId, StoreError> {
        let mut fields = input.to_fields();
        fields.insert("read".into(), false.into());
        fields.insert("createdAt".into(), chrono::Utc::now().into());
        store.add_document(MESSAGES, fields).await
    }

    pub async fn mark_as_read(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        let mut fields = Fields::new();
        fields.insert("read".into(), true.into());
        store.update_document(MESSAGES, id, fields).await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete_document(MESSAGES, id).await
    }
}
