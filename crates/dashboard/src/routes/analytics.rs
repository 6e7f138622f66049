//! Analytics summary.

use axum::{Json, extract::State};
use orderflow_core::{AnalyticsQuery, AnalyticsReport};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Report plus the derived completion rate shown on the analytics view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub report: AnalyticsReport,
    pub completion_rate: u32,
}

/// POST /api/analytics
pub async fn summary(
    State(state): State<AppState>,
    Json(query): Json<AnalyticsQuery>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let report = state.service().analytics(state.mode(), &query).await?;
    Ok(Json(AnalyticsResponse {
        completion_rate: report.completion_rate(),
        report,
    }))
}
