//! Routes read by the public portfolio site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{messages, profile, projects, skills};
use crate::state::AppState;

/// Public routes merged at the `/api/v1` root.
///
/// ```text
/// GET  /projects  -> projects::list
/// GET  /skills    -> skills::list
/// GET  /profile   -> profile::get
/// POST /contact   -> messages::submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list))
        .route("/skills", get(skills::list))
        .route("/profile", get(profile::get))
        .route("/contact", post(messages::submit_contact))
}
