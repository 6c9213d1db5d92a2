//! API request/response models for conversations.

use crate::db::models::conversations::ConversationDBResponse;
use crate::types::ConversationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing conversations
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ConversationListQuery {
    /// Email of the user whose conversations to list
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ConversationCreateRequest {
    pub email: Option<String>,
    /// Title for the new conversation; defaults to "New Chat"
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ConversationDeleteRequest {
    pub email: Option<String>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationItem {
    #[schema(value_type = String, format = "uuid")]
    pub id: ConversationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ConversationDBResponse> for ConversationItem {
    fn from(db: ConversationDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationListResponse {
    pub success: bool,
    pub data: Vec<ConversationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationCreatedResponse {
    pub success: bool,
    #[schema(value_type = String, format = "uuid")]
    pub conversation_id: ConversationId,
}
