//! Admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Counts shown on the admin overview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub projects: usize,
    pub featured_projects: usize,
    pub skills: usize,
    pub messages: usize,
    pub unread_messages: usize,
}

async fn collect_stats(state: &AppState) -> DashboardStats {
    let projects = state.projects.snapshot().await.data;
    let messages = state.messages.snapshot().await.data;
    DashboardStats {
        projects: projects.len(),
        featured_projects: projects.iter().filter(|p| p.featured).count(),
        skills: state.skills.snapshot().await.data.len(),
        messages: messages.len(),
        unread_messages: messages.iter().filter(|m| !m.read).count(),
    }
}

/// GET /api/v1/admin/dashboard
pub async fn dashboard(State(state): State<AppState>, _admin: AdminUser) -> impl IntoResponse {
    tokio::join!(
        state.projects.activate(),
        state.skills.activate(),
        state.messages.activate(),
        state.profile.activate(),
    );
    Json(DataResponse {
        data: collect_stats(&state).await,
    })
}

/// POST /api/v1/admin/refresh
///
/// Re-reads every collection from the store.
pub async fn refresh(State(state): State<AppState>, admin: AdminUser) -> impl IntoResponse {
    tokio::join!(
        state.projects.fetch(),
        state.skills.fetch(),
        state.messages.fetch(),
        state.profile.fetch(),
    );
    tracing::info!(uid = %admin.uid, "Collections refreshed");
    Json(DataResponse {
        data: collect_stats(&state).await,
    })
}
