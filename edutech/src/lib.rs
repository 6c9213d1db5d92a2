//! # edutech: Education Platform Backend
//!
//! `edutech` is the web backend for a small education platform: account
//! signup and login, a study dashboard with aggregate stats, recent
//! study-session listings, canned recommendations, and an AI learning
//! assistant that proxies chat messages to a local text-generation endpoint
//! while persisting conversation history.
//!
//! ## Overview
//!
//! Every endpoint is a direct mapping of an HTTP request onto one or two
//! database queries and a JSON response. The one outward dependency is the
//! chat feature, which forwards each message to an Ollama-style inference
//! service (`POST /api/generate`) and records both sides of the exchange when
//! the caller binds the chat to a conversation.
//!
//! ### Request Flow
//!
//! Handlers are stateless and request-per-call. A request reaches its axum
//! handler, which validates required fields, acquires a connection from the
//! PostgreSQL pool, and works through the repository layer in [`db`]. Errors
//! are typed ([`errors::Error`]) and collapse at the HTTP boundary into the
//! platform's `{"success": false, "message"}` envelope with HTTP 200 - the
//! shape the frontend parses.
//!
//! Login is deliberately stateless: a successful check returns the display
//! name and no session artifact of any kind. Clients keep the email and send
//! it with subsequent conversation requests.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) holds the axum handlers and the
//! request/response models, documented with `utoipa` and served at `/docs`.
//!
//! The **database layer** ([`db`]) uses the repository pattern over SQLx;
//! each entity (users, conversations, messages, study sessions,
//! recommendations) has a repository encapsulating its queries. Conversations
//! carry an explicit lifecycle state and are only ever soft-deleted.
//!
//! The **inference client** ([`inference`]) wraps `reqwest` with the
//! configured timeout; one blocking generation call per chat message, no
//! retries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use edutech::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = edutech::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     edutech::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! The application requires PostgreSQL and runs migrations on startup:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! edutech::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod inference;
mod openapi;
mod static_assets;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod test;

use crate::{api::handlers, inference::InferenceClient, openapi::ApiDoc};
use axum::{
    Json, Router,
    routing::{get, post},
};
use bon::Builder;
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{ConversationId, MessageId, RecommendationId, StudySessionId, UserId};

/// Application state shared across all request handlers.
///
/// - `db`: PostgreSQL connection pool
/// - `config`: Application configuration loaded from file/environment
/// - `inference`: HTTP client for the text-generation endpoint
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub inference: InferenceClient,
}

/// Get the edutech database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
///
/// - JSON API under `/api/*` (trailing-slash paths, matching the frontend)
/// - Liveness probe at `/healthz`
/// - OpenAPI docs at `/docs` (spec at `/api-docs/openapi.json`)
/// - Embedded static HTML pages on everything else
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/signup/", post(handlers::auth::signup))
        .route("/login/", post(handlers::auth::login))
        .route("/dashboard/stats/", get(handlers::dashboard::stats))
        .route("/sessions/recent/", get(handlers::study_sessions::recent_sessions))
        .route("/recommendations/", get(handlers::recommendations::list_recommendations))
        .route("/chatbot/", post(handlers::chat::chatbot))
        .route(
            "/conversations/",
            get(handlers::conversations::list_conversations)
                .post(handlers::conversations::create_conversation)
                .delete(handlers::conversations::delete_conversation),
        )
        .route("/messages/", get(handlers::messages::list_messages))
        .with_state(state);

    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .fallback_service(get(handlers::pages::serve_page))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool, runs migrations,
///    and builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Create an application on an existing pool (used by tests, which bring
    /// their own per-test database).
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        let pool = match pool {
            Some(pool) => pool,
            None => PgPool::connect(&config.database.url).await?,
        };

        migrator().run(&pool).await?;

        let inference = InferenceClient::new(&config.inference)?;

        let state = AppState::builder().db(pool.clone()).config(config.clone()).inference(inference).build();

        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Education platform listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
