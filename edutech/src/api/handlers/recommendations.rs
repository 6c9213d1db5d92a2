//! Recommendation listing handler.

use axum::{Json, extract::State};

use crate::{
    AppState,
    api::models::recommendations::{RecommendationItem, RecommendationsResponse},
    db::handlers::Recommendations,
    errors::Error,
};

const RECOMMENDATIONS_LIMIT: i64 = 3;

/// First few study recommendations
#[utoipa::path(
    get,
    path = "/api/recommendations/",
    tag = "recommendations",
    responses(
        (status = 200, description = "At most 3 recommendations", body = RecommendationsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_recommendations(State(state): State<AppState>) -> Result<Json<RecommendationsResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let recommendations = Recommendations::new(&mut conn).list_first(RECOMMENDATIONS_LIMIT).await?;

    Ok(Json(RecommendationsResponse {
        success: true,
        data: recommendations.into_iter().map(RecommendationItem::from).collect(),
    }))
}
