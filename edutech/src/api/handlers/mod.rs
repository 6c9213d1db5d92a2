//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request validation (required-field checks against the success-flag
//!   contract)
//! - Business logic execution via database repositories
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`auth`]: Signup and login
//! - [`dashboard`]: Aggregate stats
//! - [`study_sessions`]: Recent-session listing
//! - [`recommendations`]: Recommendation listing
//! - [`chat`]: The chatbot exchange (inference proxy + persistence)
//! - [`conversations`]: Conversation lifecycle
//! - [`messages`]: Conversation message history
//! - [`pages`]: Embedded static HTML pages
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`], which renders as HTTP 200 with
//! `{"success": false, "message"}` - the shape the platform's clients parse.

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod dashboard;
pub mod messages;
pub mod pages;
pub mod recommendations;
pub mod study_sessions;

use crate::errors::Error;

/// Unwrap a request field that the contract requires, treating an empty
/// string the same as an absent field.
pub(crate) fn required_field(value: Option<String>, message: &str) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingField {
            message: message.to_string(),
        }),
    }
}
