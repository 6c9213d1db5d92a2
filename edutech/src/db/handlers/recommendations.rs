//! Database repository for study recommendations.

use crate::types::abbrev_uuid;
use crate::db::{
    errors::Result,
    models::recommendations::{RecommendationCreateDBRequest, RecommendationDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

pub struct Recommendations<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Recommendations<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(user_id = %abbrev_uuid(&request.user_id)), err)]
    pub async fn create(&mut self, request: &RecommendationCreateDBRequest) -> Result<RecommendationDBResponse> {
        let recommendation_id = Uuid::new_v4();

        let recommendation = sqlx::query_as::<_, RecommendationDBResponse>(
            r#"
            INSERT INTO recommendations (id, user_id, title, icon)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, icon, created_at
            "#,
        )
        .bind(recommendation_id)
        .bind(request.user_id)
        .bind(&request.title)
        .bind(&request.icon)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(recommendation)
    }

    /// The first rows in insertion order. The API only ever shows a small
    /// fixed-size listing with no stronger ordering contract.
    #[instrument(skip(self), err)]
    pub async fn list_first(&mut self, limit: i64) -> Result<Vec<RecommendationDBResponse>> {
        let recommendations = sqlx::query_as::<_, RecommendationDBResponse>(
            r#"
            SELECT id, user_id, title, icon, created_at
            FROM recommendations
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(recommendations)
    }
}
