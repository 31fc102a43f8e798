//! Repository for the singleton `profile` collection.

use folio_core::forms::ProfileForm;
use folio_core::types::DocumentId;

use crate::collections::PROFILE;
use crate::error::StoreError;
use crate::models::profile::{Profile, UpdateProfile};
use crate::models::ToFields;
use crate::store::DocumentStore;

/// Provides access to the profile document.
pub struct ProfileRepo;

impl ProfileRepo {
    /// The first profile document in store order, if any.
    pub async fn find_first(store: &dyn DocumentStore) -> Result<Option<Profile>, StoreError> {
        let docs = store.query_collection(PROFILE, None).await?;
        Ok(docs.first().map(Profile::from_document))
    }

    pub async fn create(
        store: &dyn DocumentStore,
        input: &ProfileForm,
    ) -> Result<DocumentId, StoreError> {
        store.add_document(PROFILE, input.to_fields()).await
    }

    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateProfile,
    ) -> Result<(), StoreError> {
        store.update_document(PROFILE, id, input.to_fields()).await
    }
}
