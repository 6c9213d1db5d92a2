//! Repository implementations for database access.
//!
//! Each repository:
//! - Wraps a SQLx connection or transaction
//! - Provides strongly-typed operations for one table
//! - Returns domain models from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Users`]: User accounts and credential lookup
//! - [`Conversations`]: Chat conversation lifecycle (create, list, soft delete)
//! - [`Messages`]: Append-only chat messages
//! - [`StudySessions`]: Logged study sessions and dashboard aggregates
//! - [`Recommendations`]: Canned study recommendations

pub mod conversations;
pub mod messages;
pub mod recommendations;
pub mod repository;
pub mod study_sessions;
pub mod users;

pub use conversations::Conversations;
pub use messages::Messages;
pub use recommendations::Recommendations;
pub use repository::Repository;
pub use study_sessions::StudySessions;
pub use users::Users;
