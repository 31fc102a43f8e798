use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::auth::AuthErrorCode;
use folio_core::error::CoreError;
use folio_core::validation::FieldErrors;
use folio_db::StoreError;
use serde::Serialize;
use serde_json::json;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`StoreError`] and [`AuthError`], and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A failed auth operation; the message is already user-facing.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A submitted form failed validation. Carries the serialized per-field
    /// error struct.
    #[error("Form validation failed")]
    InvalidForm(serde_json::Value),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// `Ok(())` when `errors` is clean, otherwise [`AppError::InvalidForm`].
    pub fn check_form<E: FieldErrors + Serialize>(errors: &E) -> AppResult<()> {
        if !errors.has_errors() {
            return Ok(());
        }
        let fields = serde_json::to_value(errors)
            .map_err(|e| AppError::InternalError(format!("Serialize form errors: {e}")))?;
        Err(AppError::InvalidForm(fields))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Auth errors ---
            AppError::Auth(err) => (auth_status(&err.code), "AUTH_ERROR", err.message.clone()),

            // --- HTTP-specific errors ---
            AppError::InvalidForm(fields) => {
                let body = json!({
                    "error": "Please correct the highlighted fields",
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404.
/// - Transport and upstream API failures map to 502.
/// - Undecodable data and unaddressable documents map to 500 with a
///   sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::NotFound { collection, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{collection}/{id} not found"),
        ),
        StoreError::Request(_) | StoreError::Api { .. } => {
            tracing::error!(error = %err, "Document store unavailable");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The content store could not be reached".to_string(),
            )
        }
        StoreError::Decode(_) | StoreError::InvalidUrl(_) => {
            tracing::error!(error = %err, "Document store internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

fn auth_status(code: &AuthErrorCode) -> StatusCode {
    match code {
        AuthErrorCode::UserNotFound
        | AuthErrorCode::WrongPassword
        | AuthErrorCode::UserDisabled => StatusCode::UNAUTHORIZED,
        AuthErrorCode::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
        AuthErrorCode::NetworkRequestFailed => StatusCode::SERVICE_UNAVAILABLE,
        AuthErrorCode::InvalidEmail | AuthErrorCode::Other(_) => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::validation::ContactFormErrors;

    #[test]
    fn clean_form_passes() {
        assert!(AppError::check_form(&ContactFormErrors::default()).is_ok());
    }

    #[test]
    fn dirty_form_carries_fields() {
        let errors = ContactFormErrors {
            email: "Please enter a valid email address".into(),
            ..Default::default()
        };
        match AppError::check_form(&errors) {
            Err(AppError::InvalidForm(fields)) => {
                assert_eq!(fields["email"], "Please enter a valid email address");
                assert_eq!(fields["name"], "");
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
    }

    #[test]
    fn core_and_store_errors_map_to_statuses() {
        let not_found = AppError::Core(CoreError::NotFound {
            entity: "profile",
            id: "p1".into(),
        });
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let unauthorized = AppError::Core(CoreError::Unauthorized("Missing token".into()));
        assert_eq!(
            unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );

        let bad_url = AppError::Store(StoreError::InvalidUrl("not a url".into()));
        assert_eq!(
            bad_url.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_codes_map_to_statuses() {
        assert_eq!(
            auth_status(&AuthErrorCode::WrongPassword),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            auth_status(&AuthErrorCode::TooManyAttempts),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            auth_status(&AuthErrorCode::Other("X".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
