//! Recent study-session listing handler.

use axum::{Json, extract::State};

use crate::{
    AppState,
    api::models::study_sessions::{RecentSessionItem, RecentSessionsResponse},
    db::handlers::StudySessions,
    errors::Error,
};

/// The listing is fixed-size; clients render exactly one small card row.
const RECENT_SESSIONS_LIMIT: i64 = 3;

/// Most recent study sessions across all users
#[utoipa::path(
    get,
    path = "/api/sessions/recent/",
    tag = "sessions",
    responses(
        (status = 200, description = "At most 3 sessions, newest first", body = RecentSessionsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn recent_sessions(State(state): State<AppState>) -> Result<Json<RecentSessionsResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let sessions = StudySessions::new(&mut conn).list_recent(RECENT_SESSIONS_LIMIT).await?;

    Ok(Json(RecentSessionsResponse {
        success: true,
        data: sessions.into_iter().map(RecentSessionItem::from).collect(),
    }))
}
