//! JWT-based admin extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in admin, extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// The token alone is not enough: the process-wide auth session must still be
/// signed in as the token's subject. Logging out therefore invalidates every
/// token issued before it.
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(uid = %admin.uid, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The principal's uid (from `claims.sub`).
    pub uid: String,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let signed_in = state
            .auth
            .user()
            .is_some_and(|user| user.uid == claims.sub);
        if !signed_in {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session is no longer active".into(),
            )));
        }

        Ok(AdminUser {
            uid: claims.sub,
            email: claims.email,
        })
    }
}
