//! Database models for study recommendations.

use crate::types::{RecommendationId, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a recommendation
#[derive(Debug, Clone)]
pub struct RecommendationCreateDBRequest {
    pub user_id: UserId,
    pub title: String,
    pub icon: String,
}

/// Database response for a recommendation
#[derive(Debug, Clone, FromRow)]
pub struct RecommendationDBResponse {
    pub id: RecommendationId,
    pub user_id: UserId,
    pub title: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}
