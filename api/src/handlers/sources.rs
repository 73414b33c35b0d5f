//! Source and weight handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{OperatorId, OperatorSourceWeight, Source, SourceId, WeightAssignment};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSourceRequest {
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SourceResponse {
    pub id: i32,
    pub name: String,
    pub code: Option<String>,
}

impl From<Source> for SourceResponse {
    fn from(source: Source) -> Self {
        Self {
            id: source.id.0,
            name: source.name,
            code: source.code,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetWeightRequest {
    pub operator_id: i32,
    pub source_id: i32,
    pub weight: i32,
}

#[derive(Debug, Serialize)]
pub struct WeightResponse {
    pub id: i32,
    pub operator_id: i32,
    pub source_id: i32,
    pub weight: i32,
}

impl From<OperatorSourceWeight> for WeightResponse {
    fn from(weight: OperatorSourceWeight) -> Self {
        Self {
            id: weight.id.0,
            operator_id: weight.operator_id.0,
            source_id: weight.source_id.0,
            weight: weight.weight,
        }
    }
}

/// POST /sources
pub async fn create_source(
    State(state): State<AppState>,
    Json(request): Json<CreateSourceRequest>,
) -> Result<Json<SourceResponse>, AppError> {
    let source = state
        .source_service
        .create_source(&request.name, request.code.as_deref())
        .await?;

    Ok(Json(source.into()))
}

/// GET /sources
pub async fn list_sources(
    State(state): State<AppState>,
) -> Result<Json<Vec<SourceResponse>>, AppError> {
    let sources = state.source_service.list_sources().await?;
    Ok(Json(sources.into_iter().map(Into::into).collect()))
}

/// POST /weights
///
/// Set how much of a source's traffic an operator receives. Re-posting the
/// same (operator, source) pair replaces the weight.
pub async fn set_weight(
    State(state): State<AppState>,
    Json(request): Json<SetWeightRequest>,
) -> Result<Json<WeightResponse>, AppError> {
    let weight = state
        .source_service
        .set_weight(WeightAssignment {
            operator_id: OperatorId(request.operator_id),
            source_id: SourceId(request.source_id),
            weight: request.weight,
        })
        .await?;

    Ok(Json(weight.into()))
}

/// GET /sources/:id/weights
pub async fn list_weights_for_source(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<WeightResponse>>, AppError> {
    let weights = state.source_service.list_weights(SourceId(id)).await?;
    Ok(Json(weights.into_iter().map(Into::into).collect()))
}
