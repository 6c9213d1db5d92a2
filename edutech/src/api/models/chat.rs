//! API request/response models for the chatbot exchange.

use crate::types::ConversationId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message; required
    pub message: Option<String>,
    /// Optional: enables persistence when given together with `conversation_id`
    pub email: Option<String>,
    /// Optional: conversation to append the exchange to
    pub conversation_id: Option<String>,
}

/// Chat reply. `conversation_id` is null when the exchange was not bound to a
/// persisted conversation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub success: bool,
    pub bot_response: String,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub conversation_id: Option<ConversationId>,
}
