use std::sync::Arc;

use folio_db::DocumentStore;

use crate::auth::session::AuthSession;
use crate::collections::{MessagesCollection, ProfileCollection, ProjectsCollection, SkillsCollection};
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the admin extractor).
    pub config: Arc<ServerConfig>,
    /// The process-wide auth session.
    pub auth: Arc<AuthSession>,
    pub projects: Arc<ProjectsCollection>,
    pub skills: Arc<SkillsCollection>,
    pub messages: Arc<MessagesCollection>,
    pub profile: Arc<ProfileCollection>,
}

impl AppState {
    /// Build the state with one synchronized collection per entity, all
    /// backed by `store`.
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn DocumentStore>,
        auth: Arc<AuthSession>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth,
            projects: Arc::new(ProjectsCollection::new(Arc::clone(&store))),
            skills: Arc::new(SkillsCollection::new(Arc::clone(&store))),
            messages: Arc::new(MessagesCollection::new(Arc::clone(&store))),
            profile: Arc::new(ProfileCollection::new(store)),
        }
    }
}
