//! Repository for the `projects` collection.

use folio_core::forms::ProjectForm;
use folio_core::types::{DocumentId, Timestamp};

use crate::collections::PROJECTS;
use crate::document::{FieldValue, OrderBy};
use crate::error::StoreError;
use crate::models::project::{Project, UpdateProject};
use crate::models::ToFields;
use crate::store::DocumentStore;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects, newest first.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Project>, StoreError> {
        let docs = store
            .query_collection(PROJECTS, Some(&OrderBy::desc("createdAt")))
            .await?;
        Ok(docs.iter().map(Project::from_document).collect())
    }

    /// Create a project, stamping `createdAt` and `updatedAt`.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &ProjectForm,
    ) -> Result<DocumentId, StoreError> {
        let now = FieldValue::Timestamp(chrono::Utc::now());
        let mut fields = input.to_fields();
        fields.insert("createdAt".into(), now.clone());
        fields.insert("updatedAt".into(), now);
        store.add_document(PROJECTS, fields).await
    }

    /// Patch a project, stamping `updatedAt`. Returns the stamp written.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Timestamp, StoreError> {
        let now = chrono::Utc::now();
        let mut fields = input.to_fields();
        fields.insert("updatedAt".into(), now.into());
        store.update_document(PROJECTS, id, fields).await?;
        Ok(now)
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete_document(PROJECTS, id).await
    }
}
