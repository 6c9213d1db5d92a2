//! API response models for recent study sessions.

use crate::db::models::study_sessions::RecentSessionDBRow;
use crate::types::StudySessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recent session: flat session fields plus the owning user's identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecentSessionItem {
    #[schema(value_type = String, format = "uuid")]
    pub session_id: StudySessionId,
    pub user_name: String,
    pub email: String,
    pub title: String,
    pub subject: String,
    pub started_at: DateTime<Utc>,
}

impl From<RecentSessionDBRow> for RecentSessionItem {
    fn from(db: RecentSessionDBRow) -> Self {
        Self {
            session_id: db.id,
            user_name: db.user_name,
            email: db.email,
            title: db.title,
            subject: db.subject,
            started_at: db.started_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecentSessionsResponse {
    pub success: bool,
    pub data: Vec<RecentSessionItem>,
}
