//! Handlers for contact messages: the public contact form and the admin
//! inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::forms::ContactForm;
use folio_core::validation::rules::sanitize_input;
use folio_core::validation::validate_contact_form;
use folio_db::models::message::Message;
use serde::{Deserialize, Serialize};

use crate::collections::Snapshot;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Inbox filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFilter {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageListParams {
    #[serde(default)]
    pub filter: MessageFilter,
}

/// Inbox snapshot plus the unread badge count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListResponse {
    #[serde(flatten)]
    pub snapshot: Snapshot<Vec<Message>>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub marked: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/contact
///
/// Validates the raw submission, then stores it with the free-text fields
/// sanitized. The email is stored exactly as validated.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    AppError::check_form(&validate_contact_form(&input))?;

    let clean = ContactForm {
        name: sanitize_input(&input.name),
        email: input.email,
        message: sanitize_input(&input.message),
    };
    let id = state.messages.add(&clean).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

/// GET /api/v1/admin/messages?filter=all|unread
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<MessageListParams>,
) -> impl IntoResponse {
    state.messages.activate().await;
    let mut snapshot = state.messages.snapshot().await;
    let unread_count = snapshot.data.iter().filter(|m| !m.read).count();
    if params.filter == MessageFilter::Unread {
        snapshot.data.retain(|m| !m.read);
    }
    Json(MessageListResponse {
        snapshot,
        unread_count,
    })
}

/// POST /api/v1/admin/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.messages.mark_as_read(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/messages/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    admin: AdminUser,
) -> impl IntoResponse {
    state.messages.activate().await;
    let marked = state.messages.mark_all_read().await;
    tracing::info!(uid = %admin.uid, marked, "Marked all messages as read");
    Json(DataResponse {
        data: MarkAllReadResponse { marked },
    })
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.messages.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
