//! SQL adapter for OperatorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewOperator, Operator, OperatorId, OperatorUpdate};
use crate::domain::ports::OperatorRepository;
use crate::entity::operators;
use crate::error::DomainError;

/// SeaORM implementation of OperatorRepository
pub struct SqlOperatorRepository {
    db: DatabaseConnection,
}

impl SqlOperatorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OperatorRepository for SqlOperatorRepository {
    async fn create(&self, operator: &NewOperator) -> Result<Operator, DomainError> {
        let model = operators::ActiveModel {
            name: Set(operator.name.clone()),
            is_active: Set(true),
            load_limit: Set(operator.load_limit),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into())
    }

    async fn list(&self) -> Result<Vec<Operator>, DomainError> {
        let results = operators::Entity::find()
            .order_by_asc(operators::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: OperatorId) -> Result<Option<Operator>, DomainError> {
        let result = operators::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(result.map(|m| m.into()))
    }

    async fn update(
        &self,
        id: OperatorId,
        update: &OperatorUpdate,
    ) -> Result<Option<Operator>, DomainError> {
        let Some(existing) = operators::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut operator: Operator = existing.clone().into();
        update.apply(&mut operator);

        let mut model: operators::ActiveModel = existing.into();
        model.load_limit = Set(operator.load_limit);
        model.is_active = Set(operator.is_active);

        let result = model.update(&self.db).await?;
        Ok(Some(result.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<operators::Model> for Operator {
    fn from(model: operators::Model) -> Self {
        Operator {
            id: OperatorId(model.id),
            name: model.name,
            is_active: model.is_active,
            load_limit: model.load_limit,
        }
    }
}
