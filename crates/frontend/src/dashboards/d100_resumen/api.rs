use contracts::system::dashboard::{role_slug, DashboardMetrics};

use crate::shared::api_utils::{get_json, ApiError};

/// Metrics for the cards of one role, e.g. `/dashboard/administrador`.
pub async fn get_metrics(role: &str) -> Result<DashboardMetrics, ApiError> {
    get_json(&format!("/dashboard/{}", role_slug(role))).await
}
