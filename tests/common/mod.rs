#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::application::services::{
    AuthService, LinkService, PasswordService, TokenService,
};
use url_shortener::infrastructure::persistence::{SqliteUrlRepository, SqliteUserRepository};
use url_shortener::routes::api_router;
use url_shortener::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn url_exists(pool: &SqlitePool, alias: &str) -> bool {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url WHERE alias = ?")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
        > 0
}

/// Signs a token the same way the test state verifies it.
pub fn issue_token(user_id: i64, email: &str) -> String {
    TokenService::new(TEST_SECRET).issue(user_id, email).unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let url_repo = Arc::new(SqliteUrlRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool));

    // Minimal Argon2 cost keeps the suite fast.
    let passwords = Arc::new(PasswordService::new(1024, 1).unwrap());
    let tokens = Arc::new(TokenService::new(TEST_SECRET));

    let link_service = Arc::new(LinkService::new(url_repo, 6, 10));
    let auth_service = Arc::new(AuthService::new(user_repo, passwords, tokens));

    AppState::new(link_service, auth_service)
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    let app = api_router(create_test_state(pool), Duration::from_secs(5));
    TestServer::new(app).unwrap()
}
