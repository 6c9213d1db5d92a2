//! Database models for logged study sessions.
//!
//! A study session records a learning activity ("Algebra practice",
//! "Chemistry revision") - it has nothing to do with HTTP or login sessions.

use crate::types::{StudySessionId, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for recording a study session
#[derive(Debug, Clone)]
pub struct StudySessionCreateDBRequest {
    pub user_id: UserId,
    pub title: String,
    /// Free-text subject label; not a foreign key into `subjects`.
    pub subject: String,
    pub started_at: DateTime<Utc>,
}

/// Database response for a study session
#[derive(Debug, Clone, FromRow)]
pub struct StudySessionDBResponse {
    pub id: StudySessionId,
    pub user_id: UserId,
    pub title: String,
    pub subject: String,
    pub started_at: DateTime<Utc>,
}

/// Row shape for the recent-sessions listing: a session joined with its
/// owner's name and email.
#[derive(Debug, Clone, FromRow)]
pub struct RecentSessionDBRow {
    pub id: StudySessionId,
    pub user_name: String,
    pub email: String,
    pub title: String,
    pub subject: String,
    pub started_at: DateTime<Utc>,
}
