//! Operator service
//!
//! Creation, listing and partial updates of operators.

use std::sync::Arc;

use crate::domain::entities::{NewOperator, Operator, OperatorId, OperatorUpdate};
use crate::domain::ports::OperatorRepository;
use crate::error::{AppError, DomainError};

/// Service for managing operators
pub struct OperatorService<OR>
where
    OR: OperatorRepository,
{
    operators: Arc<OR>,
    default_load_limit: i32,
}

impl<OR> OperatorService<OR>
where
    OR: OperatorRepository,
{
    pub fn new(operators: Arc<OR>, default_load_limit: i32) -> Self {
        Self {
            operators,
            default_load_limit,
        }
    }

    /// Create an active operator. Without an explicit limit the configured default applies.
    pub async fn create(&self, name: &str, load_limit: Option<i32>) -> Result<Operator, AppError> {
        let new_operator = NewOperator {
            name: name.trim().to_string(),
            load_limit: load_limit.unwrap_or(self.default_load_limit),
        };
        new_operator.validate().map_err(DomainError::Validation)?;

        let operator = self.operators.create(&new_operator).await?;
        tracing::info!(
            operator_id = %operator.id,
            load_limit = operator.load_limit,
            "Operator created"
        );
        Ok(operator)
    }

    pub async fn list(&self) -> Result<Vec<Operator>, AppError> {
        Ok(self.operators.list().await?)
    }

    pub async fn get(&self, id: OperatorId) -> Result<Operator, AppError> {
        self.operators
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))
    }

    /// Change the load limit and/or activity flag; absent fields are left as they are
    pub async fn update(
        &self,
        id: OperatorId,
        update: OperatorUpdate,
    ) -> Result<Operator, AppError> {
        update.validate().map_err(DomainError::Validation)?;

        let operator = self
            .operators
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))?;

        tracing::info!(
            operator_id = %operator.id,
            is_active = operator.is_active,
            load_limit = operator.load_limit,
            "Operator updated"
        );
        Ok(operator)
    }
}
