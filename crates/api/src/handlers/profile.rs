//! Handlers for the profile singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::forms::ProfileForm;
use folio_core::validation::validate_profile_form;
use folio_db::models::profile::{Education, UpdateProfile};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `PUT /admin/profile`: the settings form plus optional timeline
/// lists. Omitted lists are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(flatten)]
    pub form: ProfileForm,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<String>>,
}

/// GET /api/v1/profile
///
/// The first read on an empty store seeds the default profile.
pub async fn get(State(state): State<AppState>) -> impl IntoResponse {
    state.profile.activate().await;
    Json(state.profile.snapshot().await)
}

/// PUT /api/v1/admin/profile
pub async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    AppError::check_form(&validate_profile_form(&input.form))?;

    state.profile.activate().await;
    let current = state
        .profile
        .current()
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity: "profile",
            id: "current".to_string(),
        })?;

    let patch = UpdateProfile {
        education: input.education,
        goals: input.goals,
        experience: input.experience,
        ..UpdateProfile::from(input.form)
    };
    state.profile.update(&current.id, &patch).await?;
    tracing::info!(uid = %admin.uid, "Admin updated profile");

    let profile = state.profile.current().await.unwrap_or(current);
    Ok(Json(DataResponse { data: profile }))
}
