//! Handlers for projects: the public list and the admin editor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::forms::ProjectForm;
use folio_core::validation::validate_project_form;
use folio_db::models::project::UpdateProject;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    /// Only featured projects when `true`.
    pub featured: Option<bool>,
}

/// Trim tech entries, drop blanks and duplicates, keep first-seen order.
fn normalize_tech_stack(form: &mut ProjectForm) {
    let mut seen = Vec::with_capacity(form.tech_stack.len());
    for tech in form.tech_stack.drain(..) {
        let tech = tech.trim().to_string();
        if !tech.is_empty() && !seen.contains(&tech) {
            seen.push(tech);
        }
    }
    form.tech_stack = seen;
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> impl IntoResponse {
    state.projects.activate().await;
    let mut snapshot = state.projects.snapshot().await;
    if params.featured == Some(true) {
        snapshot.data.retain(|p| p.featured);
    }
    Json(snapshot)
}

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(mut input): Json<ProjectForm>,
) -> AppResult<impl IntoResponse> {
    normalize_tech_stack(&mut input);
    AppError::check_form(&validate_project_form(&input))?;

    let id = state.projects.add(&input).await?;
    tracing::info!(uid = %admin.uid, id = %id, "Admin created project");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Replaces the editable fields and returns the updated record.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(mut input): Json<ProjectForm>,
) -> AppResult<impl IntoResponse> {
    normalize_tech_stack(&mut input);
    AppError::check_form(&validate_project_form(&input))?;

    state.projects.activate().await;
    let project = state
        .projects
        .update(&id, &UpdateProject::from(input))
        .await?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.projects.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_stack_is_trimmed_and_deduplicated() {
        let mut form = ProjectForm {
            tech_stack: vec![
                " Flutter ".into(),
                "".into(),
                "Dart".into(),
                "Flutter".into(),
                "   ".into(),
            ],
            ..Default::default()
        };
        normalize_tech_stack(&mut form);
        assert_eq!(form.tech_stack, vec!["Flutter", "Dart"]);
    }
}
