//! Handlers for skills.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::forms::SkillForm;
use folio_core::validation::validate_skill_form;
use folio_db::models::skill::UpdateSkill;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

/// GET /api/v1/skills
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    state.skills.activate().await;
    Json(state.skills.snapshot().await)
}

/// POST /api/v1/admin/skills
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(input): Json<SkillForm>,
) -> AppResult<impl IntoResponse> {
    AppError::check_form(&validate_skill_form(&input))?;

    let id = state.skills.add(&input).await?;
    tracing::info!(uid = %admin.uid, id = %id, "Admin created skill");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

/// PUT /api/v1/admin/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(input): Json<SkillForm>,
) -> AppResult<impl IntoResponse> {
    AppError::check_form(&validate_skill_form(&input))?;

    state.skills.activate().await;
    let skill = state.skills.update(&id, &UpdateSkill::from(input)).await?;
    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/admin/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.skills.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
