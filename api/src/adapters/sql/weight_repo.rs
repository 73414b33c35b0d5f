//! SQL adapter for WeightRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::distribution::Candidate;
use crate::domain::entities::{
    OperatorId, OperatorSourceWeight, SourceId, WeightAssignment, WeightId,
};
use crate::domain::ports::WeightRepository;
use crate::entity::{operator_source_weights as weights, operators};
use crate::error::DomainError;

/// SeaORM implementation of WeightRepository
pub struct SqlWeightRepository {
    db: DatabaseConnection,
}

impl SqlWeightRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WeightRepository for SqlWeightRepository {
    async fn upsert(
        &self,
        assignment: &WeightAssignment,
    ) -> Result<OperatorSourceWeight, DomainError> {
        let model = weights::ActiveModel {
            operator_id: Set(assignment.operator_id.0),
            source_id: Set(assignment.source_id.0),
            weight: Set(assignment.weight),
            ..Default::default()
        };

        weights::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([weights::Column::OperatorId, weights::Column::SourceId])
                    .update_column(weights::Column::Weight)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        // The insert id is unreliable after an update-on-conflict; read the row back
        let stored = weights::Entity::find()
            .filter(weights::Column::OperatorId.eq(assignment.operator_id.0))
            .filter(weights::Column::SourceId.eq(assignment.source_id.0))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "weight for operator {} / source {} missing after upsert",
                    assignment.operator_id, assignment.source_id
                ))
            })?;

        Ok(stored.into())
    }

    async fn list_by_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<OperatorSourceWeight>, DomainError> {
        let results = weights::Entity::find()
            .filter(weights::Column::SourceId.eq(source_id.0))
            .order_by_asc(weights::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn active_operators_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<Candidate>, DomainError> {
        let rows = weights::Entity::find()
            .find_also_related(operators::Entity)
            .filter(weights::Column::SourceId.eq(source_id.0))
            .filter(operators::Column::IsActive.eq(true))
            .order_by_asc(weights::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(weight, operator)| {
                operator.map(|op| Candidate {
                    operator: op.into(),
                    weight: weight.weight,
                })
            })
            .collect())
    }
}

impl From<weights::Model> for OperatorSourceWeight {
    fn from(model: weights::Model) -> Self {
        OperatorSourceWeight {
            id: WeightId(model.id),
            operator_id: OperatorId(model.operator_id),
            source_id: SourceId(model.source_id),
            weight: model.weight,
        }
    }
}
