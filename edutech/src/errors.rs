use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// A required request field is absent or empty
    #[error("{message}")]
    MissingField { message: String },

    /// Signup attempted with an email that is already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failed; deliberately identical for "no such user" and "wrong password"
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No user could be resolved from the supplied email
    #[error("User not found")]
    UserNotFound,

    /// Conversation missing, or owned by a different user
    #[error("Conversation not found")]
    ConversationNotFound,

    /// The inference endpoint could not be reached or returned garbage
    #[error("Inference request failed: {message}")]
    UpstreamUnavailable { message: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingField { message } => message.clone(),
            Error::DuplicateEmail => "Email already registered".to_string(),
            Error::InvalidCredentials => "Invalid email or password".to_string(),
            Error::UserNotFound => "User not found".to_string(),
            Error::ConversationNotFound => "Conversation not found".to_string(),
            Error::UpstreamUnavailable { .. } => "AI service unavailable".to_string(),
            Error::Internal { .. } => "Internal server error".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::UniqueViolation { constraint, table, .. } => {
                    match (table.as_deref(), constraint.as_deref()) {
                        (Some("users"), Some(c)) if c.contains("email") => "Email already registered".to_string(),
                        _ => "Resource already exists".to_string(),
                    }
                }
                DbError::ForeignKeyViolation { .. } => "Invalid reference to related resource".to_string(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

/// Every failure renders as HTTP 200 with `{"success": false, "message": ...}`.
///
/// Clients of this API parse the `success` flag rather than the status code;
/// the success-flag JSON shape is the compatibility contract and must be kept
/// stable even though it collapses the error taxonomy on the wire.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::UpstreamUnavailable { .. } => {
                tracing::warn!("Inference upstream error: {}", self);
            }
            Error::MissingField { .. }
            | Error::DuplicateEmail
            | Error::InvalidCredentials
            | Error::UserNotFound
            | Error::ConversationNotFound => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let body = json!({
            "success": false,
            "message": self.user_message(),
        });

        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
