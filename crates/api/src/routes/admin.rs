//! Route definitions for the admin panel.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{dashboard, messages, profile, projects, skills};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /projects               -> projects::create
/// PUT    /projects/{id}          -> projects::update
/// DELETE /projects/{id}          -> projects::delete
/// POST   /skills                 -> skills::create
/// PUT    /skills/{id}            -> skills::update
/// DELETE /skills/{id}            -> skills::delete
/// GET    /messages               -> messages::list
/// POST   /messages/read-all      -> messages::mark_all_read
/// DELETE /messages/{id}          -> messages::delete
/// POST   /messages/{id}/read     -> messages::mark_read
/// PUT    /profile                -> profile::update
/// GET    /dashboard              -> dashboard::dashboard
/// POST   /refresh                -> dashboard::refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(projects::create))
        .route(
            "/projects/{id}",
            put(projects::update).delete(projects::delete),
        )
        .route("/skills", post(skills::create))
        .route("/skills/{id}", put(skills::update).delete(skills::delete))
        .route("/messages", get(messages::list))
        .route("/messages/read-all", post(messages::mark_all_read))
        .route("/messages/{id}", delete(messages::delete))
        .route("/messages/{id}/read", post(messages::mark_read))
        .route("/profile", put(profile::update))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/refresh", post(dashboard::refresh))
}
