//! API request and response data models.
//!
//! Data structures for HTTP request deserialization and response
//! serialization; these define the public API contract and are kept separate
//! from the database models in [`crate::db::models`].
//!
//! Request fields that the original contract treats as required are modeled
//! as `Option` and checked in the handlers, so a missing field produces the
//! standard success-flag failure instead of a deserialization rejection.

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod dashboard;
pub mod messages;
pub mod recommendations;
pub mod study_sessions;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic acknowledgment body: `{success, message}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
