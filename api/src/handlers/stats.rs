//! Statistics handlers

use axum::{extract::State, Json};

use crate::domain::entities::{OperatorStats, SourceStats};
use crate::error::AppError;
use crate::AppState;

/// GET /stats/operators
///
/// Contact count per operator, all statuses.
pub async fn stats_by_operator(
    State(state): State<AppState>,
) -> Result<Json<Vec<OperatorStats>>, AppError> {
    Ok(Json(state.report_service.stats_by_operator().await?))
}

/// GET /stats/sources
pub async fn stats_by_source(
    State(state): State<AppState>,
) -> Result<Json<Vec<SourceStats>>, AppError> {
    Ok(Json(state.report_service.stats_by_source().await?))
}
