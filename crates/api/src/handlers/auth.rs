//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::auth::User;
use folio_core::forms::LoginForm;
use folio_core::validation::rules::validate_email;
use folio_core::validation::{validate_login_form, FieldErrors};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// Per-field errors for the reset form.
#[derive(Debug, Serialize)]
struct ResetPasswordErrors {
    email: String,
}

impl FieldErrors for ResetPasswordErrors {
    fn messages(&self) -> Vec<&str> {
        vec![self.email.as_str()]
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Validate the login form, sign in through the auth session, and issue an
/// admin access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginForm>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    AppError::check_form(&validate_login_form(&input))?;

    let user = state.auth.login(input.email.trim(), &input.password).await?;

    let access_token = generate_access_token(&user, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Sign out. Every previously issued token stops working.
pub async fn logout(State(state): State<AppState>, admin: AdminUser) -> AppResult<StatusCode> {
    state.auth.logout().await?;
    tracing::info!(uid = %admin.uid, "Logout complete");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim();
    AppError::check_form(&ResetPasswordErrors {
        email: validate_email(email),
    })?;

    state.auth.reset_password(email).await?;
    Ok(Json(DataResponse {
        data: serde_json::json!({ "sent": true }),
    }))
}

/// GET /api/v1/auth/session
///
/// Current principal and whether the session has finished initializing.
pub async fn session(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.auth.snapshot(),
    })
}
