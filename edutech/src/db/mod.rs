//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to keep persistence decoupled from the
//! HTTP handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for each entity
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! Repositories wrap a `&mut PgConnection`, so they work against a pool
//! connection or a transaction interchangeably:
//!
//! ```ignore
//! let mut conn = pool.acquire().await?;
//! let mut users = Users::new(&mut conn);
//! if let Some(user) = users.get_user_by_email("user@example.com").await? {
//!     println!("Found user: {}", user.name);
//! }
//! ```
//!
//! # Migrations
//!
//! Database migrations live in the `migrations/` directory and run on
//! startup via [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
