//! Repository for the `skills` collection.

use folio_core::forms::SkillForm;
use folio_core::types::DocumentId;

use crate::collections::SKILLS;
use crate::document::OrderBy;
use crate::error::StoreError;
use crate::models::skill::{Skill, UpdateSkill};
use crate::models::ToFields;
use crate::store::DocumentStore;

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List all skills, most proficient first.
    ///
    /// Documents that fail to decode (e.g. an unknown category written by
    /// another client) are skipped with a warning.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Skill>, StoreError> {
        let docs = store
            .query_collection(SKILLS, Some(&OrderBy::desc("proficiency")))
            .await?;
        Ok(docs
            .iter()
            .filter_map(|doc| match Skill::from_document(doc) {
                Ok(skill) => Some(skill),
                Err(e) => {
                    tracing::warn!(id = %doc.id, error = %e, "Skipping undecodable skill");
                    None
                }
            })
            .collect())
    }

    pub async fn create(
        store: &dyn DocumentStore,
        input: &SkillForm,
    ) -> Result<DocumentId, StoreError> {
        store.add_document(SKILLS, input.to_fields()).await
    }

    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateSkill,
    ) -> Result<(), StoreError> {
        store.update_document(SKILLS, id, input.to_fields()).await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete_document(SKILLS, id).await
    }
}
