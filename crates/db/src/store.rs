//! The document store boundary.

use async_trait::async_trait;
use folio_core::types::DocumentId;

use crate::document::{Document, Fields, OrderBy};
use crate::error::StoreError;

/// The four operations the application needs from a document database.
///
/// Implementations must be cheap to share behind an `Arc`; every method takes
/// `&self`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read every document in `collection`.
    ///
    /// With `order_by`, documents lacking the order field are excluded and the
    /// rest are sorted by it. Without, documents come back in store order.
    async fn query_collection(
        &self,
        collection: &str,
        order_by: Option<&OrderBy>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Create a document with a store-assigned id and return that id.
    async fn add_document(&self, collection: &str, fields: Fields)
        -> Result<DocumentId, StoreError>;

    /// Merge `fields` into an existing document. Keys not present in `fields`
    /// are left untouched. Fails with [`StoreError::NotFound`] if the document
    /// does not exist.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
