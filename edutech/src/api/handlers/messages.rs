//! Conversation message-history handler.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    api::handlers::conversations::resolve_owned_conversation,
    api::handlers::required_field,
    api::models::messages::{MessageItem, MessageListQuery, MessageListResponse},
    db::handlers::{Messages, Users},
    errors::Error,
};

/// A conversation's messages, oldest first
///
/// Soft-deleted conversations stay retrievable here: deletion only hides them
/// from the conversation listing.
#[utoipa::path(
    get,
    path = "/api/messages/",
    params(MessageListQuery),
    tag = "conversations",
    responses(
        (status = 200, description = "Conversation metadata and messages", body = MessageListResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, Error> {
    let email = required_field(query.email, "Email is required")?;
    let conversation_id = required_field(query.conversation_id, "Conversation id is required")?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let user = Users::new(&mut conn).get_user_by_email(&email).await?.ok_or(Error::UserNotFound)?;
    let conversation = resolve_owned_conversation(&mut conn, user.id, &conversation_id).await?;

    let messages = Messages::new(&mut conn).list_for_conversation(conversation.id).await?;

    Ok(Json(MessageListResponse {
        success: true,
        conversation_id: conversation.id,
        title: conversation.title,
        data: messages.into_iter().map(MessageItem::from).collect(),
    }))
}
