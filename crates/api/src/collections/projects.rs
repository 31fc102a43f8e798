use std::sync::Arc;

use folio_core::forms::ProjectForm;
use folio_core::types::DocumentId;
use folio_db::models::project::{Project, UpdateProject};
use folio_db::repositories::ProjectRepo;
use folio_db::models::ToFields;
use folio_db::{Document, DocumentStore, StoreError};

use super::state::{Phase, Snapshot, SyncedState};

/// Projects, newest first.
pub struct ProjectsCollection {
    store: Arc<dyn DocumentStore>,
    state: SyncedState<Vec<Project>>,
}

impl ProjectsCollection {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            state: SyncedState::new("projects"),
        }
    }

    /// Fetch once on first use; later calls return immediately.
    pub async fn activate(&self) {
        self.state.activate(|| self.fetch()).await;
    }

    pub async fn fetch(&self) {
        self.state.sync(ProjectRepo::list(self.store.as_ref())).await;
    }

    pub async fn snapshot(&self) -> Snapshot<Vec<Project>> {
        self.state.snapshot().await
    }

    pub async fn phase(&self) -> Phase {
        self.state.phase().await
    }

    pub async fn add(&self, form: &ProjectForm) -> Result<DocumentId, StoreError> {
        let id = ProjectRepo::create(self.store.as_ref(), form)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error adding project"))?;
        tracing::info!(id = %id, title = %form.title, "Project created");
        self.fetch().await;
        Ok(id)
    }

    fn find(snapshot: Snapshot<Vec<Project>>, id: &str) -> Option<Project> {
        snapshot.data.into_iter().find(|p| p.id == id)
    }

    /// Patch a project and return it with the patch applied.
    ///
    /// The result does not depend on the re-sync succeeding: the patch is laid
    /// over the freshest known copy of the record.
    pub async fn update(&self, id: &str, patch: &UpdateProject) -> Result<Project, StoreError> {
        let before = Self::find(self.snapshot().await, id);
        let updated_at = ProjectRepo::update(self.store.as_ref(), id, patch)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error updating project"))?;
        tracing::info!(id, "Project updated");
        self.fetch().await;

        let mut project = match Self::find(self.snapshot().await, id).or(before) {
            Some(project) => project,
            None => Project::from_document(&Document {
                id: id.to_string(),
                fields: patch.to_fields(),
            }),
        };
        patch.apply_to(&mut project);
        project.updated_at = updated_at;
        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        ProjectRepo::delete(self.store.as_ref(), id)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error deleting project"))?;
        tracing::info!(id, "Project deleted");
        self.fetch().await;
        Ok(())
    }
}
