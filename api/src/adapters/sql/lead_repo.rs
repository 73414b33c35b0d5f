//! SQL adapter for LeadRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{Lead, LeadId, NewLead};
use crate::domain::ports::LeadRepository;
use crate::entity::leads;
use crate::error::DomainError;

/// SeaORM implementation of LeadRepository
pub struct SqlLeadRepository {
    db: DatabaseConnection,
}

impl SqlLeadRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeadRepository for SqlLeadRepository {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Lead>, DomainError> {
        let result = leads::Entity::find()
            .filter(leads::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError> {
        let result = leads::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, lead: &NewLead) -> Result<Lead, DomainError> {
        let model = leads::ActiveModel {
            external_id: Set(lead.external_id.clone()),
            name: Set(lead.name.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into())
    }

    async fn set_name(&self, id: LeadId, name: &str) -> Result<Lead, DomainError> {
        let result = leads::ActiveModel {
            id: Set(id.0),
            name: Set(Some(name.to_string())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Lead {} not found", id))
            }
            e => e.into(),
        })?;

        Ok(result.into())
    }

    async fn list(&self) -> Result<Vec<Lead>, DomainError> {
        let results = leads::Entity::find()
            .order_by_asc(leads::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<leads::Model> for Lead {
    fn from(model: leads::Model) -> Self {
        Lead {
            id: LeadId(model.id),
            external_id: model.external_id,
            name: model.name,
        }
    }
}
