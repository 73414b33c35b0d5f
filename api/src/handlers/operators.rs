//! Operator handlers
//!
//! Endpoints for creating, listing and updating operators.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Operator, OperatorId, OperatorUpdate};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating an operator
#[derive(Debug, Deserialize)]
pub struct CreateOperatorRequest {
    pub name: String,
    /// Defaults to the configured load limit
    pub load_limit: Option<i32>,
}

/// Request body for updating an operator; omitted fields are unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOperatorRequest {
    pub load_limit: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct OperatorResponse {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub load_limit: i32,
}

impl From<Operator> for OperatorResponse {
    fn from(operator: Operator) -> Self {
        Self {
            id: operator.id.0,
            name: operator.name,
            is_active: operator.is_active,
            load_limit: operator.load_limit,
        }
    }
}

/// POST /operators
pub async fn create_operator(
    State(state): State<AppState>,
    Json(request): Json<CreateOperatorRequest>,
) -> Result<Json<OperatorResponse>, AppError> {
    let operator = state
        .operator_service
        .create(&request.name, request.load_limit)
        .await?;

    Ok(Json(operator.into()))
}

/// GET /operators
pub async fn list_operators(
    State(state): State<AppState>,
) -> Result<Json<Vec<OperatorResponse>>, AppError> {
    let operators = state.operator_service.list().await?;
    Ok(Json(operators.into_iter().map(Into::into).collect()))
}

/// GET /operators/:id
pub async fn get_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OperatorResponse>, AppError> {
    let operator = state.operator_service.get(OperatorId(id)).await?;
    Ok(Json(operator.into()))
}

/// PATCH /operators/:id
///
/// Change load limit and/or activity.
pub async fn update_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateOperatorRequest>,
) -> Result<Json<OperatorResponse>, AppError> {
    let operator = state
        .operator_service
        .update(
            OperatorId(id),
            OperatorUpdate {
                load_limit: request.load_limit,
                is_active: request.is_active,
            },
        )
        .await?;

    Ok(Json(operator.into()))
}
