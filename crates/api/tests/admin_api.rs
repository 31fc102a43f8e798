//! Integration tests for the admin panel endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, post_auth, post_json, post_json_auth, put_json_auth,
};
use folio_db::collections;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn project_body(title: &str, featured: bool) -> Value {
    json!({
        "title": title,
        "description": "A Flutter app with offline sync",
        "techStack": [" Flutter ", "Dart", "Flutter", ""],
        "imageUrl": "https://img.example.com/cover.png",
        "githubUrl": "https://github.com/me/app",
        "featured": featured,
    })
}

fn skill_body(name: &str, proficiency: i64) -> Value {
    json!({
        "name": name,
        "category": "flutter",
        "icon": "flutter",
        "proficiency": proficiency,
    })
}

async fn create(app: axum::Router, uri: &str, body: Value, token: &str) -> String {
    let response = post_json_auth(app, uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .expect("created id")
        .to_string()
}

// ---------------------------------------------------------------------------
// Auth enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_require_token() {
    let test = common::build_test_app().await;

    let response = get(test.app(), "/api/v1/admin/messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(test.app(), "/api/v1/admin/messages", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_crud_round_trip() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let id = create(
        test.app(),
        "/api/v1/admin/projects",
        project_body("Weather", true),
        &token,
    )
    .await;

    let json = body_json(get(test.app(), "/api/v1/projects").await).await;
    assert_eq!(json["data"][0]["id"], id.as_str());
    assert_eq!(json["data"][0]["techStack"], json!(["Flutter", "Dart"]));

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/admin/projects/{id}"),
        project_body("Weather v2", false),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Weather v2");
    assert_eq!(json["data"]["featured"], false);

    let response = delete_auth(test.app(), &format!("/api/v1/admin/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.store.count(collections::PROJECTS).await, 0);
}

#[tokio::test]
async fn featured_filter_limits_public_list() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    create(
        test.app(),
        "/api/v1/admin/projects",
        project_body("Featured", true),
        &token,
    )
    .await;
    create(
        test.app(),
        "/api/v1/admin/projects",
        project_body("Plain", false),
        &token,
    )
    .await;

    let json = body_json(get(test.app(), "/api/v1/projects?featured=true").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Featured"]);
}

#[tokio::test]
async fn invalid_project_returns_field_errors() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let body = json!({
        "title": "X",
        "description": "short",
        "techStack": ["  "],
        "imageUrl": "not a url",
        "githubUrl": "",
        "demoUrl": "also not a url",
    });
    let response = post_json_auth(test.app(), "/api/v1/admin/projects", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fields = &body_json(response).await["fields"];
    assert_eq!(fields["title"], "Title must be at least 3 characters");
    assert_eq!(fields["githubUrl"], "GitHub URL is required");
    assert_eq!(fields["techStack"], "At least one technology is required");
    assert_eq!(fields["demoUrl"], "Please enter a valid URL for Demo URL");
}

#[tokio::test]
async fn updating_missing_project_returns_404() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let response = put_json_auth(
        test.app(),
        "/api/v1/admin/projects/does-not-exist",
        project_body("Ghost", false),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[tokio::test]
async fn skills_list_by_proficiency_and_update() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    create(test.app(), "/api/v1/admin/skills", skill_body("Dart", 3), &token).await;
    let id = create(test.app(), "/api/v1/admin/skills", skill_body("Flutter", 5), &token).await;

    let json = body_json(get(test.app(), "/api/v1/skills").await).await;
    assert_eq!(json["data"][0]["name"], "Flutter");
    assert_eq!(json["data"][1]["name"], "Dart");

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/admin/skills/{id}"),
        skill_body("Flutter", 4),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["proficiency"], 4);
}

#[tokio::test]
async fn skill_with_unknown_category_is_rejected() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let mut body = skill_body("Rust", 9);
    body["category"] = json!("backend");
    let response = post_json_auth(test.app(), "/api/v1/admin/skills", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fields = &body_json(response).await["fields"];
    assert_eq!(fields["category"], "Please select a valid category");
    assert_eq!(fields["proficiency"], "Proficiency must be between 1 and 5");
    assert_eq!(test.store.count(collections::SKILLS).await, 0);
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

async fn submit_contact(app: axum::Router, name: &str) {
    let body = json!({
        "name": name,
        "email": "visitor@example.com",
        "message": "I would like to hire you for a project.",
    });
    let response = post_json(app, "/api/v1/contact", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn inbox_filter_and_mark_read() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;
    submit_contact(test.app(), "Alice").await;
    submit_contact(test.app(), "Bob").await;

    let json = body_json(get_auth(test.app(), "/api/v1/admin/messages", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["unreadCount"], 2);

    let id = json["data"][0]["id"].as_str().unwrap().to_string();
    let response = post_auth(
        test.app(),
        &format!("/api/v1/admin/messages/{id}/read"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(
        get_auth(test.app(), "/api/v1/admin/messages?filter=unread", &token).await,
    )
    .await;
    let unread = json["data"].as_array().unwrap();
    assert_eq!(unread.len(), 1);
    assert_ne!(unread[0]["id"], id.as_str());
    assert_eq!(json["unreadCount"], 1);
}

#[tokio::test]
async fn mark_all_read_and_delete() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;
    submit_contact(test.app(), "Alice").await;
    submit_contact(test.app(), "Bob").await;

    let response = post_auth(test.app(), "/api/v1/admin/messages/read-all", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["marked"], 2);
    assert_eq!(test.state.messages.unread_count().await, 0);

    let id = test.state.messages.snapshot().await.data[0].id.clone();
    let response = delete_auth(test.app(), &format!("/api/v1/admin/messages/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(test.store.count(collections::MESSAGES).await, 1);
}

// ---------------------------------------------------------------------------
// Profile and dashboard
// ---------------------------------------------------------------------------

fn profile_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "title": "Mobile Engineer",
        "bio": "I build mobile apps with Flutter and care about clean, tested code.",
        "email": "ada@example.com",
        "location": "London",
        "university": "University of London",
        "socialLinks": { "github": "https://github.com/ada" },
        "goals": ["Ship an app", "Start freelancing"],
    })
}

#[tokio::test]
async fn profile_update_patches_singleton() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let response = put_json_auth(test.app(), "/api/v1/admin/profile", profile_body(), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert_eq!(json["data"]["goals"], json!(["Ship an app", "Start freelancing"]));
    assert_eq!(json["data"]["socialLinks"]["github"], "https://github.com/ada");

    let public = body_json(get(test.app(), "/api/v1/profile").await).await;
    assert_eq!(public["data"]["title"], "Mobile Engineer");
    assert_eq!(test.store.count(collections::PROFILE).await, 1);
}

#[tokio::test]
async fn profile_update_validates_form() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    let mut body = profile_body();
    body["bio"] = json!("Too short");
    let response = put_json_auth(test.app(), "/api/v1/admin/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["fields"]["bio"],
        "Bio must be at least 50 characters"
    );
}

#[tokio::test]
async fn dashboard_counts_every_collection() {
    let test = common::build_test_app().await;
    let token = common::login_admin(test.app()).await;

    create(
        test.app(),
        "/api/v1/admin/projects",
        project_body("Featured", true),
        &token,
    )
    .await;
    create(test.app(), "/api/v1/admin/skills", skill_body("Dart", 3), &token).await;
    submit_contact(test.app(), "Alice").await;

    let json = body_json(get_auth(test.app(), "/api/v1/admin/dashboard", &token).await).await;
    assert_eq!(
        json["data"],
        json!({
            "projects": 1,
            "featuredProjects": 1,
            "skills": 1,
            "messages": 1,
            "unreadMessages": 1,
        })
    );

    let response = post_auth(test.app(), "/api/v1/admin/refresh", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["projects"], 1);
}
