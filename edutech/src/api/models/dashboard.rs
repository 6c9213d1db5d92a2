//! API response models for the dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    /// Count of all registered users
    pub total_students: i64,
    /// Count of study sessions started on the current calendar date
    pub active_sessions_today: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub success: bool,
    pub data: DashboardStats,
}
