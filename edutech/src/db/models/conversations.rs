//! Database models for chat conversations.

use crate::types::{ConversationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Title given to conversations created without an explicit one. A
/// conversation still carrying this title gets renamed from the first user
/// message sent into it.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Maximum number of characters of the first user message used as a title.
const TITLE_MAX_CHARS: usize = 50;

/// Conversation lifecycle state.
///
/// Conversations are never removed from the database; deletion flips the
/// state to [`Deleted`](ConversationStatus::Deleted) and the row (and its
/// messages) stay retrievable by direct lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Deleted,
}

/// Database request for creating a new conversation
#[derive(Debug, Clone)]
pub struct ConversationCreateDBRequest {
    pub user_id: UserId,
    pub title: String,
}

/// Database response for a conversation
#[derive(Debug, Clone, FromRow)]
pub struct ConversationDBResponse {
    pub id: ConversationId,
    pub user_id: UserId,
    pub title: String,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Derive a conversation title from the first user message: the first 50
/// characters, "..."-suffixed when the message was longer. Counts characters,
/// not bytes, so multi-byte text never gets split mid-scalar.
pub fn title_from_message(message: &str) -> String {
    let mut title: String = message.chars().take(TITLE_MAX_CHARS).collect();
    if message.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_kept_verbatim() {
        assert_eq!(title_from_message("What is recursion?"), "What is recursion?");
    }

    #[test]
    fn test_exactly_fifty_chars_not_truncated() {
        let message = "a".repeat(50);
        assert_eq!(title_from_message(&message), message);
    }

    #[test]
    fn test_long_message_truncated_with_ellipsis() {
        let message = "x".repeat(70);
        let title = title_from_message(&message);
        assert_eq!(title, format!("{}...", "x".repeat(50)));
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 60 multi-byte characters; byte-based slicing would panic or split a scalar
        let message = "é".repeat(60);
        let title = title_from_message(&message);
        assert_eq!(title, format!("{}...", "é".repeat(50)));
    }
}
