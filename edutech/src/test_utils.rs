//! Test utilities for integration testing.

use crate::config::{Config, DatabaseConfig};
use crate::db::handlers::{Conversations, Recommendations, Repository, StudySessions, Users};
use crate::db::models::conversations::{ConversationCreateDBRequest, ConversationDBResponse, DEFAULT_TITLE};
use crate::db::models::recommendations::{RecommendationCreateDBRequest, RecommendationDBResponse};
use crate::db::models::study_sessions::{StudySessionCreateDBRequest, StudySessionDBResponse};
use crate::db::models::users::{UserCreateDBRequest, UserDBResponse};
use crate::types::UserId;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Install the rustls crypto provider once per test process.
///
/// In production this happens in `main`; tests never run `main`, so any test
/// that builds a TLS-backed reqwest client (directly or via the application)
/// must ensure the provider is installed first.
pub fn install_crypto_provider() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    });
}

pub async fn create_test_app(pool: PgPool) -> TestServer {
    create_test_app_with_config(pool, create_test_config()).await
}

pub async fn create_test_app_with_config(pool: PgPool, config: Config) -> TestServer {
    install_crypto_provider();
    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig {
            // The pool is provided directly by the test harness
            url: "postgres://unused".to_string(),
        },
        ..Config::default()
    }
}

pub async fn create_test_user(pool: &PgPool, email: &str) -> UserDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut users_repo = Users::new(&mut conn);

    let user_create = UserCreateDBRequest {
        name: "Test User".to_string(),
        email: email.to_string(),
        // A syntactically fake hash; tests that exercise login go through the
        // signup endpoint instead so the real hasher runs.
        password_hash: "$argon2id$test-only-hash".to_string(),
    };

    users_repo.create(&user_create).await.expect("Failed to create test user")
}

pub async fn create_test_conversation(pool: &PgPool, user_id: UserId) -> ConversationDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut conversations_repo = Conversations::new(&mut conn);

    conversations_repo
        .create(&ConversationCreateDBRequest {
            user_id,
            title: DEFAULT_TITLE.to_string(),
        })
        .await
        .expect("Failed to create test conversation")
}

pub async fn create_test_session(
    pool: &PgPool,
    user_id: UserId,
    title: &str,
    started_at: DateTime<Utc>,
) -> StudySessionDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut sessions_repo = StudySessions::new(&mut conn);

    sessions_repo
        .create(&StudySessionCreateDBRequest {
            user_id,
            title: title.to_string(),
            subject: "Mathematics".to_string(),
            started_at,
        })
        .await
        .expect("Failed to create test session")
}

pub async fn create_test_recommendation(pool: &PgPool, user_id: UserId, title: &str) -> RecommendationDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut recommendations_repo = Recommendations::new(&mut conn);

    recommendations_repo
        .create(&RecommendationCreateDBRequest {
            user_id,
            title: title.to_string(),
            icon: "📘".to_string(),
        })
        .await
        .expect("Failed to create test recommendation")
}
