pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
/// /auth/logout                        logout (requires auth)
/// /auth/reset-password                send reset email (public)
/// /auth/session                       current session snapshot (public)
///
/// /projects                           list (public, ?featured=true)
/// /skills                             list (public)
/// /profile                            get (public, seeds defaults)
/// /contact                            submit contact form (public)
///
/// /admin/projects                     create
/// /admin/projects/{id}                update, delete
/// /admin/skills                       create
/// /admin/skills/{id}                  update, delete
/// /admin/messages                     list (?filter=all|unread)
/// /admin/messages/read-all            mark every message read
/// /admin/messages/{id}                delete
/// /admin/messages/{id}/read           mark read
/// /admin/profile                      update
/// /admin/dashboard                    overview counts
/// /admin/refresh                      re-read every collection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes.
        .nest("/auth", auth::router())
        // Admin panel; every handler requires a session token.
        .nest("/admin", admin::router())
        // Public site.
        .merge(public::router())
}
