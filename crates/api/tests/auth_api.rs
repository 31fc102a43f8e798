//! HTTP-level integration tests for login, logout, password reset, and the
//! session snapshot.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_auth, post_json, ADMIN_EMAIL, ADMIN_PASSWORD};
use folio_core::auth::{MSG_USER_DISABLED, MSG_USER_NOT_FOUND, MSG_WRONG_PASSWORD};
use serde_json::json;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_returns_token_and_user() {
    let test = common::build_test_app().await;

    let body = json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 15 * 60);
    assert_eq!(json["data"]["user"]["email"], ADMIN_EMAIL);

    let user = test.state.auth.user().expect("session should be signed in");
    assert_eq!(json["data"]["user"]["uid"], user.uid);
}

#[tokio::test]
async fn login_unknown_account_returns_message() {
    let test = common::build_test_app().await;

    let body = json!({ "email": "ghost@example.com", "password": "whatever" });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], MSG_USER_NOT_FOUND);
    assert_eq!(json["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn login_wrong_password_returns_401() {
    let test = common::build_test_app().await;

    let body = json!({ "email": ADMIN_EMAIL, "password": "incorrect" });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], MSG_WRONG_PASSWORD);
    assert!(test.state.auth.user().is_none());
}

#[tokio::test]
async fn login_disabled_account_returns_401() {
    let test = common::build_test_app().await;
    test.provider.set_disabled(ADMIN_EMAIL, true).await;

    let body = json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], MSG_USER_DISABLED);
}

#[tokio::test]
async fn login_invalid_form_returns_422() {
    let test = common::build_test_app().await;

    let body = json!({ "email": "", "password": "123" });
    let response = post_json(test.app(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["fields"]["email"], "Email is required");
    assert_eq!(
        json["fields"]["password"],
        "Password must be at least 6 characters"
    );
}

// ---------------------------------------------------------------------------
// Session and logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_reflects_login() {
    let test = common::build_test_app().await;

    let json = body_json(get(test.app(), "/api/v1/auth/session").await).await;
    assert_eq!(json["data"]["loading"], false);
    assert!(json["data"]["user"].is_null());

    common::login_admin(test.app()).await;

    let json = body_json(get(test.app(), "/api/v1/auth/session").await).await;
    assert_eq!(json["data"]["user"]["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn logout_invalidates_issued_tokens() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let response = get_auth(test.app(), "/api/v1/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_auth(test.app(), "/api/v1/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(test.state.auth.user().is_none());

    let response = get_auth(test.app(), "/api/v1/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Session is no longer active"
    );
}

#[tokio::test]
async fn logout_without_token_returns_401() {
    let test = common::build_test_app().await;
    let response = post_json(test.app(), "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Password reset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_password_sends_for_known_account() {
    let test = common::build_test_app().await;

    let body = json!({ "email": ADMIN_EMAIL });
    let response = post_json(test.app(), "/api/v1/auth/reset-password", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["sent"], true);
    assert_eq!(test.provider.sent_resets().await, vec![ADMIN_EMAIL]);
}

#[tokio::test]
async fn reset_password_rejects_bad_input() {
    let test = common::build_test_app().await;

    let response = post_json(
        test.app(),
        "/api/v1/auth/reset-password",
        json!({ "email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        test.app(),
        "/api/v1/auth/reset-password",
        json!({ "email": "ghost@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], MSG_USER_NOT_FOUND);
    assert!(test.provider.sent_resets().await.is_empty());
}
