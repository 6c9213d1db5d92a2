//! Common type definitions.
//!
//! All entity IDs are UUIDs wrapped in type aliases for better readability:
//!
//! - [`UserId`]: User account identifier
//! - [`ConversationId`]: Chat conversation identifier
//! - [`MessageId`]: Chat message identifier
//! - [`StudySessionId`]: Logged study session identifier (a study activity,
//!   not an HTTP session)
//! - [`RecommendationId`]: Study recommendation identifier

use uuid::Uuid;

// Type aliases for IDs
pub type UserId = Uuid;
pub type ConversationId = Uuid;
pub type MessageId = Uuid;
pub type StudySessionId = Uuid;
pub type RecommendationId = Uuid;

/// Abbreviate a UUID to its first 8 characters for more readable logs and traces
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_uuid(uuid: &Uuid) -> String {
    uuid.to_string().chars().take(8).collect()
}
