//! Conversation lifecycle handlers.
//!
//! `/api/conversations/` is method-gated: GET lists, POST creates, DELETE
//! soft-deletes. Every operation resolves the user by email first; the caller
//! tracks their email client-side since login issues no session artifact.

use axum::{
    Json,
    extract::{Query, State},
};
use uuid::Uuid;

use crate::{
    AppState,
    api::handlers::required_field,
    api::models::{
        Ack,
        conversations::{
            ConversationCreateRequest, ConversationCreatedResponse, ConversationDeleteRequest, ConversationItem,
            ConversationListQuery, ConversationListResponse,
        },
    },
    db::{
        handlers::{Conversations, Repository, Users},
        models::conversations::{ConversationCreateDBRequest, ConversationDBResponse, DEFAULT_TITLE},
        models::users::UserDBResponse,
    },
    errors::Error,
    types::UserId,
};

async fn resolve_user(conn: &mut sqlx::PgConnection, email: &str) -> Result<UserDBResponse, Error> {
    Users::new(conn).get_user_by_email(email).await?.ok_or(Error::UserNotFound)
}

/// Fetch a conversation and check it belongs to the given user. A foreign or
/// unknown id is indistinguishable from a missing one.
pub(crate) async fn resolve_owned_conversation(
    conn: &mut sqlx::PgConnection,
    user_id: UserId,
    conversation_id: &str,
) -> Result<ConversationDBResponse, Error> {
    let conversation_id = Uuid::parse_str(conversation_id).map_err(|_| Error::ConversationNotFound)?;

    let conversation = Conversations::new(conn)
        .get_by_id(conversation_id)
        .await?
        .ok_or(Error::ConversationNotFound)?;

    if conversation.user_id != user_id {
        return Err(Error::ConversationNotFound);
    }

    Ok(conversation)
}

/// List a user's active conversations, newest-updated-first
#[utoipa::path(
    get,
    path = "/api/conversations/",
    params(ConversationListQuery),
    tag = "conversations",
    responses(
        (status = 200, description = "Active conversations", body = ConversationListResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_conversations(
    State(state): State<AppState>,
    Query(query): Query<ConversationListQuery>,
) -> Result<Json<ConversationListResponse>, Error> {
    let email = required_field(query.email, "Email is required")?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let user = resolve_user(&mut conn, &email).await?;

    let conversations = Conversations::new(&mut conn).list_active_for_user(user.id).await?;

    Ok(Json(ConversationListResponse {
        success: true,
        data: conversations.into_iter().map(ConversationItem::from).collect(),
    }))
}

/// Create a conversation
#[utoipa::path(
    post,
    path = "/api/conversations/",
    request_body = ConversationCreateRequest,
    tag = "conversations",
    responses(
        (status = 200, description = "Created conversation id", body = ConversationCreatedResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_conversation(
    State(state): State<AppState>,
    Json(request): Json<ConversationCreateRequest>,
) -> Result<Json<ConversationCreatedResponse>, Error> {
    let email = required_field(request.email, "Email is required")?;
    let title = request.title.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let user = resolve_user(&mut conn, &email).await?;

    let conversation = Conversations::new(&mut conn)
        .create(&ConversationCreateDBRequest { user_id: user.id, title })
        .await?;

    Ok(Json(ConversationCreatedResponse {
        success: true,
        conversation_id: conversation.id,
    }))
}

/// Soft-delete a conversation
#[utoipa::path(
    delete,
    path = "/api/conversations/",
    request_body = ConversationDeleteRequest,
    tag = "conversations",
    responses(
        (status = 200, description = "Deletion acknowledgment", body = Ack),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_conversation(
    State(state): State<AppState>,
    Json(request): Json<ConversationDeleteRequest>,
) -> Result<Json<Ack>, Error> {
    let email = required_field(request.email, "Email is required")?;
    let conversation_id = required_field(request.conversation_id, "Conversation id is required")?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let user = resolve_user(&mut conn, &email).await?;
    let conversation = resolve_owned_conversation(&mut conn, user.id, &conversation_id).await?;

    Conversations::new(&mut conn).delete(conversation.id).await?;

    Ok(Json(Ack::ok("Conversation deleted")))
}
