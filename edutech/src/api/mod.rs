//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # Response contract
//!
//! Every JSON endpoint answers HTTP 200 with a `success` flag; failures carry
//! a user-safe `message` alongside `success: false`. Clients parse the flag,
//! not the status code. See [`crate::errors::Error`] for the mapping.
//!
//! # OpenAPI Documentation
//!
//! Endpoints are documented with `utoipa` annotations; the rendered docs are
//! served at `/docs` when the server is running.

pub mod handlers;
pub mod models;
