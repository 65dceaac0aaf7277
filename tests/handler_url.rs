mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_save_url_with_alias(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "ex1" }));
    assert!(common::url_exists(&pool, "ex1").await);
}

#[sqlx::test]
async fn test_save_url_generates_alias(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com/long/path" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();

    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(common::url_exists(&pool, alias).await);
}

#[sqlx::test]
async fn test_save_url_empty_alias_generates_alias(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_save_url_duplicate_alias(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let body = json!({ "url": "https://example.com", "alias": "ex1" });

    server
        .post("/url")
        .authorization_bearer(&token)
        .json(&body)
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&body)
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Alias already taken");
}

#[sqlx::test]
async fn test_save_url_reserved_alias(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "alias": "register" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!common::url_exists(&pool, "register").await);
}

#[sqlx::test]
async fn test_save_url_alias_with_bad_characters(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "alias": "a/b" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_save_url_invalid_url(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_save_url_unsupported_scheme(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_save_url_without_token(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test]
async fn test_save_url_with_bad_token(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/url")
        .authorization_bearer("not.a.token")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_save_url_with_token_from_other_secret(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = url_shortener::application::services::TokenService::new("another-secret")
        .issue(1, "user@example.com")
        .unwrap();

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_save_url_with_newline_is_rejected(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://exa\nmple.com/", "alias": "nl" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!common::url_exists(&pool, "nl").await);

    server.get("/nl").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_save_url_missing_url_field(pool: SqlitePool) {
    let server = common::make_server(pool);
    let token = common::issue_token(1, "user@example.com");

    let response = server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"]["code"], "validation_error");
}
