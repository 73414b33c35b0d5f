//! Source service
//!
//! Sources and per-source operator weights.

use std::sync::Arc;

use crate::domain::entities::{NewSource, OperatorSourceWeight, Source, SourceId, WeightAssignment};
use crate::domain::ports::{OperatorRepository, SourceRepository, WeightRepository};
use crate::error::{AppError, DomainError};

/// Service for managing sources and their operator weights
pub struct SourceService<SR, OR, WR>
where
    SR: SourceRepository,
    OR: OperatorRepository,
    WR: WeightRepository,
{
    sources: Arc<SR>,
    operators: Arc<OR>,
    weights: Arc<WR>,
}

impl<SR, OR, WR> SourceService<SR, OR, WR>
where
    SR: SourceRepository,
    OR: OperatorRepository,
    WR: WeightRepository,
{
    pub fn new(sources: Arc<SR>, operators: Arc<OR>, weights: Arc<WR>) -> Self {
        Self {
            sources,
            operators,
            weights,
        }
    }

    pub async fn create_source(&self, name: &str, code: Option<&str>) -> Result<Source, AppError> {
        let new_source = NewSource {
            name: name.trim().to_string(),
            code: code.map(|c| c.trim().to_string()),
        };
        new_source.validate().map_err(DomainError::Validation)?;

        let source = self.sources.create(&new_source).await?;
        tracing::info!(source_id = %source.id, name = %source.name, "Source created");
        Ok(source)
    }

    pub async fn list_sources(&self) -> Result<Vec<Source>, AppError> {
        Ok(self.sources.list().await?)
    }

    /// Set the weight of an operator for a source, replacing any previous value
    pub async fn set_weight(
        &self,
        assignment: WeightAssignment,
    ) -> Result<OperatorSourceWeight, AppError> {
        assignment.validate().map_err(DomainError::Validation)?;

        if self
            .operators
            .find_by_id(assignment.operator_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Operator not found".to_string()));
        }
        if self
            .sources
            .find_by_id(assignment.source_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Source not found".to_string()));
        }

        let weight = self.weights.upsert(&assignment).await?;
        tracing::debug!(
            operator_id = %weight.operator_id,
            source_id = %weight.source_id,
            weight = weight.weight,
            "Weight set"
        );
        Ok(weight)
    }

    /// Weights configured for a source. An unknown source simply has none.
    pub async fn list_weights(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<OperatorSourceWeight>, AppError> {
        Ok(self.weights.list_by_source(source_id).await?)
    }
}
