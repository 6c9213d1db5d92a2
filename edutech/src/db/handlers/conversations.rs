//! Database repository for chat conversations.
//!
//! Conversations are soft-deleted: [`Repository::delete`] flips the lifecycle
//! state to `deleted` and the row stays in place, so message history remains
//! reachable by direct ID lookup.

use crate::types::{ConversationId, UserId, abbrev_uuid};
use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::conversations::{ConversationCreateDBRequest, ConversationDBResponse, ConversationStatus},
};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Conversations<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Conversations<'c> {
    type CreateRequest = ConversationCreateDBRequest;
    type Response = ConversationDBResponse;
    type Id = ConversationId;

    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id)), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let conversation_id = Uuid::new_v4();

        let conversation = sqlx::query_as::<_, ConversationDBResponse>(
            r#"
            INSERT INTO conversations (id, user_id, title)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, status, created_at, updated_at
            "#,
        )
        .bind(conversation_id)
        .bind(request.user_id)
        .bind(&request.title)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(conversation)
    }

    #[instrument(skip(self), fields(conversation_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let conversation = sqlx::query_as::<_, ConversationDBResponse>(
            "SELECT id, user_id, title, status, created_at, updated_at FROM conversations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(conversation)
    }

    /// Soft delete: the row is retained with `status = 'deleted'`.
    #[instrument(skip(self), fields(conversation_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("UPDATE conversations SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(ConversationStatus::Deleted)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Conversations<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Active conversations for a user, newest-updated-first.
    #[instrument(skip(self), fields(user_id = %abbrev_uuid(&user_id)), err)]
    pub async fn list_active_for_user(&mut self, user_id: UserId) -> Result<Vec<ConversationDBResponse>> {
        let conversations = sqlx::query_as::<_, ConversationDBResponse>(
            r#"
            SELECT id, user_id, title, status, created_at, updated_at
            FROM conversations
            WHERE user_id = $1 AND status = $2
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .bind(ConversationStatus::Active)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(conversations)
    }

    /// Replace the title (used when the first user message names a
    /// still-default conversation) and refresh `updated_at`.
    #[instrument(skip(self, title), fields(conversation_id = %abbrev_uuid(&id)), err)]
    pub async fn rename(&mut self, id: ConversationId, title: &str) -> Result<()> {
        sqlx::query("UPDATE conversations SET title = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(title)
            .execute(&mut *self.db)
            .await?;

        Ok(())
    }

    /// Refresh `updated_at` without touching anything else.
    #[instrument(skip(self), fields(conversation_id = %abbrev_uuid(&id)), err)]
    pub async fn touch(&mut self, id: ConversationId) -> Result<()> {
        sqlx::query("UPDATE conversations SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(())
    }
}
