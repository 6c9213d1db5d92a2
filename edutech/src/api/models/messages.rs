//! API request/response models for conversation messages.

use crate::db::models::messages::{MessageDBResponse, MessageRole};
use crate::types::{ConversationId, MessageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing a conversation's messages
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MessageListQuery {
    /// Email of the conversation's owner
    pub email: Option<String>,
    /// Conversation to fetch
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageItem {
    #[schema(value_type = String, format = "uuid")]
    pub id: MessageId,
    #[schema(value_type = String, example = "user")]
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageDBResponse> for MessageItem {
    fn from(db: MessageDBResponse) -> Self {
        Self {
            id: db.id,
            role: db.role,
            content: db.content,
            created_at: db.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageListResponse {
    pub success: bool,
    #[schema(value_type = String, format = "uuid")]
    pub conversation_id: ConversationId,
    pub title: String,
    pub data: Vec<MessageItem>,
}
