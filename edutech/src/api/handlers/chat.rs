//! The chatbot exchange: inference proxy plus conversation persistence.

use axum::{Json, extract::State};
use tracing::debug;
use uuid::Uuid;

use crate::{
    AppState,
    api::handlers::required_field,
    api::models::chat::{ChatRequest, ChatResponse},
    db::{
        handlers::{Conversations, Messages, Repository, Users},
        models::conversations::{ConversationDBResponse, DEFAULT_TITLE, title_from_message},
        models::messages::{MessageCreateDBRequest, MessageRole},
    },
    errors::Error,
    inference::build_prompt,
};

/// Resolve the target conversation for persistence, requiring both an email
/// and a conversation id that belongs to that user.
///
/// Resolution failure is not an error: the chat still proceeds, it just
/// doesn't get persisted.
async fn resolve_persistence_target(
    conn: &mut sqlx::PgConnection,
    email: Option<&str>,
    conversation_id: Option<&str>,
) -> Result<Option<ConversationDBResponse>, Error> {
    let (Some(email), Some(conversation_id)) = (email, conversation_id) else {
        return Ok(None);
    };

    let Some(user) = Users::new(&mut *conn).get_user_by_email(email).await? else {
        debug!("chat persistence skipped: no user for the supplied email");
        return Ok(None);
    };

    let Ok(conversation_id) = Uuid::parse_str(conversation_id) else {
        debug!("chat persistence skipped: malformed conversation id");
        return Ok(None);
    };

    let Some(conversation) = Conversations::new(&mut *conn).get_by_id(conversation_id).await? else {
        debug!("chat persistence skipped: conversation does not exist");
        return Ok(None);
    };

    if conversation.user_id != user.id {
        debug!("chat persistence skipped: conversation belongs to a different user");
        return Ok(None);
    }

    Ok(Some(conversation))
}

/// Send a message to the learning assistant
///
/// Proxies the message to the configured inference endpoint and, when a
/// resolvable email + conversation id pair was supplied, records both sides
/// of the exchange in that conversation.
#[utoipa::path(
    post,
    path = "/api/chatbot/",
    request_body = ChatRequest,
    tag = "chat",
    responses(
        (status = 200, description = "Assistant reply (check the success flag)", body = ChatResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn chatbot(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Result<Json<ChatResponse>, Error> {
    let message = required_field(request.message, "Message is required")?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let conversation = resolve_persistence_target(&mut conn, request.email.as_deref(), request.conversation_id.as_deref()).await?;

    // 1. Record the user's side before calling out; the two writes are
    // independent, so a failure after this point can leave a user message
    // without its reply.
    if let Some(conversation) = &conversation {
        Messages::new(&mut conn)
            .create(&MessageCreateDBRequest {
                conversation_id: conversation.id,
                role: MessageRole::User,
                content: message.clone(),
            })
            .await?;
    }

    // 2. One blocking call to the inference endpoint, no retry.
    let bot_response = state.inference.generate(&build_prompt(&message)).await?;

    // 3. Record the assistant's side and refresh the conversation: a
    // still-default title is replaced with the start of the user's message.
    if let Some(conversation) = &conversation {
        Messages::new(&mut conn)
            .create(&MessageCreateDBRequest {
                conversation_id: conversation.id,
                role: MessageRole::Assistant,
                content: bot_response.clone(),
            })
            .await?;

        let mut conversations = Conversations::new(&mut conn);
        if conversation.title == DEFAULT_TITLE {
            conversations.rename(conversation.id, &title_from_message(&message)).await?;
        } else {
            conversations.touch(conversation.id).await?;
        }
    }

    Ok(Json(ChatResponse {
        success: true,
        bot_response,
        conversation_id: conversation.map(|c| c.id),
    }))
}
