//! Database repository for chat messages.
//!
//! Messages are append-only: there is no update or delete. They stay in place
//! even when their conversation is soft-deleted.

use crate::types::{ConversationId, abbrev_uuid};
use crate::db::{
    errors::Result,
    models::messages::{MessageCreateDBRequest, MessageDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Messages<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Messages<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(conversation_id = %abbrev_uuid(&request.conversation_id), role = ?request.role), err)]
    pub async fn create(&mut self, request: &MessageCreateDBRequest) -> Result<MessageDBResponse> {
        let message_id = Uuid::new_v4();

        let message = sqlx::query_as::<_, MessageDBResponse>(
            r#"
            INSERT INTO messages (id, conversation_id, role, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, conversation_id, role, content, created_at
            "#,
        )
        .bind(message_id)
        .bind(request.conversation_id)
        .bind(request.role)
        .bind(&request.content)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(message)
    }

    /// All messages of a conversation, oldest first.
    #[instrument(skip(self), fields(conversation_id = %abbrev_uuid(&conversation_id)), err)]
    pub async fn list_for_conversation(&mut self, conversation_id: ConversationId) -> Result<Vec<MessageDBResponse>> {
        let messages = sqlx::query_as::<_, MessageDBResponse>(
            r#"
            SELECT id, conversation_id, role, content, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::repository::Repository;
    use crate::db::handlers::{Conversations, Users};
    use crate::db::models::conversations::{ConversationCreateDBRequest, DEFAULT_TITLE};
    use crate::db::models::messages::MessageRole;
    use crate::db::models::users::UserCreateDBRequest;
    use sqlx::PgPool;

    async fn setup_conversation(pool: &PgPool) -> ConversationId {
        let mut conn = pool.acquire().await.unwrap();
        let user = Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                name: "Msg User".to_string(),
                email: "msg@example.com".to_string(),
                password_hash: "$argon2id$fake-hash".to_string(),
            })
            .await
            .unwrap();

        Conversations::new(&mut conn)
            .create(&ConversationCreateDBRequest {
                user_id: user.id,
                title: DEFAULT_TITLE.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_messages_listed_oldest_first(pool: PgPool) {
        let conversation_id = setup_conversation(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Messages::new(&mut conn);

        for (role, content) in [
            (MessageRole::User, "What is a derivative?"),
            (MessageRole::Assistant, "The rate of change of a function."),
            (MessageRole::User, "Give an example"),
        ] {
            repo.create(&MessageCreateDBRequest {
                conversation_id,
                role,
                content: content.to_string(),
            })
            .await
            .unwrap();
        }

        let messages = repo.list_for_conversation(conversation_id).await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "What is a derivative?");
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, "Give an example");
        assert!(messages.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_messages_survive_conversation_soft_delete(pool: PgPool) {
        let conversation_id = setup_conversation(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        Messages::new(&mut conn)
            .create(&MessageCreateDBRequest {
                conversation_id,
                role: MessageRole::User,
                content: "still here".to_string(),
            })
            .await
            .unwrap();

        Conversations::new(&mut conn).delete(conversation_id).await.unwrap();

        let messages = Messages::new(&mut conn).list_for_conversation(conversation_id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "still here");
    }
}
