//! API response models for study recommendations.

use crate::db::models::recommendations::RecommendationDBResponse;
use crate::types::RecommendationId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationItem {
    #[schema(value_type = String, format = "uuid")]
    pub id: RecommendationId,
    pub title: String,
    pub icon: String,
}

impl From<RecommendationDBResponse> for RecommendationItem {
    fn from(db: RecommendationDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            icon: db.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub data: Vec<RecommendationItem>,
}
