use std::sync::Arc;

use folio_core::forms::SkillForm;
use folio_core::types::DocumentId;
use folio_db::models::skill::{Skill, UpdateSkill};
use folio_db::repositories::SkillRepo;
use folio_db::models::ToFields;
use folio_db::{Document, DocumentStore, StoreError};

use super::state::{Phase, Snapshot, SyncedState};

/// Skills, most proficient first.
pub struct SkillsCollection {
    store: Arc<dyn DocumentStore>,
    state: SyncedState<Vec<Skill>>,
}

impl SkillsCollection {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            state: SyncedState::new("skills"),
        }
    }

    pub async fn activate(&self) {
        self.state.activate(|| self.fetch()).await;
    }

    pub async fn fetch(&self) {
        self.state.sync(SkillRepo::list(self.store.as_ref())).await;
    }

    pub async fn snapshot(&self) -> Snapshot<Vec<Skill>> {
        self.state.snapshot().await
    }

    pub async fn phase(&self) -> Phase {
        self.state.phase().await
    }

    pub async fn add(&self, form: &SkillForm) -> Result<DocumentId, StoreError> {
        let id = SkillRepo::create(self.store.as_ref(), form)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error adding skill"))?;
        tracing::info!(id = %id, name = %form.name, "Skill created");
        self.fetch().await;
        Ok(id)
    }

    fn find(snapshot: Snapshot<Vec<Skill>>, id: &str) -> Option<Skill> {
        snapshot.data.into_iter().find(|s| s.id == id)
    }

    /// Patch a skill and return it with the patch applied, whether or not the
    /// re-sync that follows succeeds.
    pub async fn update(&self, id: &str, patch: &UpdateSkill) -> Result<Skill, StoreError> {
        let before = Self::find(self.snapshot().await, id);
        SkillRepo::update(self.store.as_ref(), id, patch)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error updating skill"))?;
        self.fetch().await;

        let mut skill = match Self::find(self.snapshot().await, id).or(before) {
            Some(skill) => skill,
            None => Skill::from_document(&Document {
                id: id.to_string(),
                fields: patch.to_fields(),
            })?,
        };
        patch.apply_to(&mut skill);
        Ok(skill)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        SkillRepo::delete(self.store.as_ref(), id)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error deleting skill"))?;
        self.fetch().await;
        Ok(())
    }
}
