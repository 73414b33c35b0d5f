//! SQL adapter for SourceRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewSource, Source, SourceId};
use crate::domain::ports::SourceRepository;
use crate::entity::sources;
use crate::error::DomainError;

/// SeaORM implementation of SourceRepository
pub struct SqlSourceRepository {
    db: DatabaseConnection,
}

impl SqlSourceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SourceRepository for SqlSourceRepository {
    async fn create(&self, source: &NewSource) -> Result<Source, DomainError> {
        let model = sources::ActiveModel {
            name: Set(source.name.clone()),
            code: Set(source.code.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| match DomainError::from(e) {
            DomainError::AlreadyExists(_) => DomainError::AlreadyExists(format!(
                "Source with name '{}' or code {:?} already exists",
                source.name, source.code
            )),
            other => other,
        })?;

        Ok(result.into())
    }

    async fn list(&self) -> Result<Vec<Source>, DomainError> {
        let results = sources::Entity::find()
            .order_by_asc(sources::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: SourceId) -> Result<Option<Source>, DomainError> {
        let result = sources::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(result.map(|m| m.into()))
    }
}

impl From<sources::Model> for Source {
    fn from(model: sources::Model) -> Self {
        Source {
            id: SourceId(model.id),
            name: model.name,
            code: model.code,
        }
    }
}
