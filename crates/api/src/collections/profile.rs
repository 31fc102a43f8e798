use std::sync::Arc;

use folio_db::models::profile::{default_profile, Profile, UpdateProfile};
use folio_db::repositories::ProfileRepo;
use folio_db::{DocumentStore, StoreError};
use tokio::sync::Mutex;

use super::state::{Phase, Snapshot, SyncedState};

/// The profile singleton.
///
/// A fetch that finds the collection empty writes the default profile and
/// reads it back, so the collection holds exactly one document afterwards.
pub struct ProfileCollection {
    store: Arc<dyn DocumentStore>,
    state: SyncedState<Option<Profile>>,
    /// Serializes the find-or-create path of concurrent fetches.
    seed_lock: Mutex<()>,
}

impl ProfileCollection {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            state: SyncedState::new("profile"),
            seed_lock: Mutex::new(()),
        }
    }

    pub async fn activate(&self) {
        self.state.activate(|| self.fetch()).await;
    }

    pub async fn fetch(&self) {
        self.state.sync(self.find_or_create()).await;
    }

    pub async fn snapshot(&self) -> Snapshot<Option<Profile>> {
        self.state.snapshot().await
    }

    pub async fn current(&self) -> Option<Profile> {
        self.state.data().await
    }

    pub async fn phase(&self) -> Phase {
        self.state.phase().await
    }

    pub async fn update(&self, id: &str, patch: &UpdateProfile) -> Result<(), StoreError> {
        ProfileRepo::update(self.store.as_ref(), id, patch)
            .await
            .inspect_err(|e| tracing::error!(id, error = %e, "Error updating profile"))?;
        tracing::info!(id, "Profile updated");
        self.fetch().await;
        Ok(())
    }

    async fn find_or_create(&self) -> Result<Option<Profile>, StoreError> {
        let store = self.store.as_ref();
        if let Some(profile) = ProfileRepo::find_first(store).await? {
            return Ok(Some(profile));
        }

        let _guard = self.seed_lock.lock().await;
        if let Some(profile) = ProfileRepo::find_first(store).await? {
            return Ok(Some(profile));
        }
        let id = ProfileRepo::create(store, &default_profile())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error adding profile"))?;
        tracing::info!(id = %id, "Default profile created");
        ProfileRepo::find_first(store).await
    }
}
