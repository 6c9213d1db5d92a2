//! Dashboard statistics handler.

use axum::{Json, extract::State};

use crate::{
    AppState,
    api::models::dashboard::{DashboardStats, DashboardStatsResponse},
    db::handlers::{StudySessions, Users},
    errors::Error,
};

/// Aggregate platform stats, recomputed on every call
#[utoipa::path(
    get,
    path = "/api/dashboard/stats/",
    tag = "dashboard",
    responses(
        (status = 200, description = "Current totals", body = DashboardStatsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStatsResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let total_students = Users::new(&mut conn).count().await?;
    let active_sessions_today = StudySessions::new(&mut conn).count_started_today().await?;

    Ok(Json(DashboardStatsResponse {
        success: true,
        data: DashboardStats {
            total_students,
            active_sessions_today,
        },
    }))
}
