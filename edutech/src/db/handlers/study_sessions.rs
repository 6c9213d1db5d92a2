//! Database repository for logged study sessions.

use crate::types::abbrev_uuid;
use crate::db::{
    errors::Result,
    models::study_sessions::{RecentSessionDBRow, StudySessionCreateDBRequest, StudySessionDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct StudySessions<'c> {
    db: &'c mut PgConnection,
}

impl<'c> StudySessions<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id)), err)]
    pub async fn create(&mut self, request: &StudySessionCreateDBRequest) -> Result<StudySessionDBResponse> {
        let session_id = Uuid::new_v4();

        let session = sqlx::query_as::<_, StudySessionDBResponse>(
            r#"
            INSERT INTO study_sessions (id, user_id, title, subject, started_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, subject, started_at
            "#,
        )
        .bind(session_id)
        .bind(request.user_id)
        .bind(&request.title)
        .bind(&request.subject)
        .bind(request.started_at)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(session)
    }

    /// The most recent sessions by start time, joined with the owning user's
    /// name and email.
    #[instrument(skip(self), err)]
    pub async fn list_recent(&mut self, limit: i64) -> Result<Vec<RecentSessionDBRow>> {
        let sessions = sqlx::query_as::<_, RecentSessionDBRow>(
            r#"
            SELECT s.id, u.name AS user_name, u.email, s.title, s.subject, s.started_at
            FROM study_sessions s
            JOIN users u ON u.id = s.user_id
            ORDER BY s.started_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(sessions)
    }

    /// Sessions whose start time falls on the database server's current
    /// calendar date (the dashboard's `active_sessions_today`).
    #[instrument(skip(self), err)]
    pub async fn count_started_today(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM study_sessions WHERE started_at::date = CURRENT_DATE",
        )
        .fetch_one(&mut *self.db)
        .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::Users;
    use crate::db::handlers::repository::Repository;
    use crate::db::models::users::UserCreateDBRequest;
    use crate::types::UserId;
    use chrono::{Duration, Utc};
    use sqlx::PgPool;

    async fn setup_user(pool: &PgPool, email: &str) -> UserId {
        let mut conn = pool.acquire().await.unwrap();
        Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                name: "Learner".to_string(),
                email: email.to_string(),
                password_hash: "$argon2id$fake-hash".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn session(user_id: UserId, title: &str, started_at: chrono::DateTime<Utc>) -> StudySessionCreateDBRequest {
        StudySessionCreateDBRequest {
            user_id,
            title: title.to_string(),
            subject: "Mathematics".to_string(),
            started_at,
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_recent_ordered_and_capped(pool: PgPool) {
        let user_id = setup_user(&pool, "recent@example.com").await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = StudySessions::new(&mut conn);

        let now = Utc::now();
        for days_ago in 0..5 {
            repo.create(&session(user_id, &format!("Session {days_ago}"), now - Duration::days(days_ago)))
                .await
                .unwrap();
        }

        let recent = repo.list_recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].title, "Session 0");
        assert_eq!(recent[1].title, "Session 1");
        assert_eq!(recent[2].title, "Session 2");
        assert_eq!(recent[0].email, "recent@example.com");
        assert!(recent.windows(2).all(|w| w[0].started_at >= w[1].started_at));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_count_started_today_ignores_history(pool: PgPool) {
        let user_id = setup_user(&pool, "today@example.com").await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = StudySessions::new(&mut conn);

        let now = Utc::now();
        repo.create(&session(user_id, "Today A", now)).await.unwrap();
        repo.create(&session(user_id, "Today B", now)).await.unwrap();
        for days_ago in 1..=8 {
            repo.create(&session(user_id, "Historical", now - Duration::days(days_ago)))
                .await
                .unwrap();
        }

        assert_eq!(repo.count_started_today().await.unwrap(), 2);
    }
}
