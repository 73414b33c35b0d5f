//! SQL adapter for ContactRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{
    Contact, ContactId, ContactStatus, LeadId, NewContact, OperatorId, OperatorStats, SourceId,
    SourceStats,
};
use crate::domain::ports::ContactRepository;
use crate::entity::{contacts, operators, sources};
use crate::error::DomainError;

/// SeaORM implementation of ContactRepository
pub struct SqlContactRepository {
    db: DatabaseConnection,
}

impl SqlContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct OperatorCountRow {
    operator_id: i32,
    operator_name: String,
    contacts_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct SourceCountRow {
    source_id: i32,
    source_name: String,
    contacts_count: i64,
}

#[async_trait]
impl ContactRepository for SqlContactRepository {
    async fn create(&self, contact: &NewContact) -> Result<Contact, DomainError> {
        let model = contacts::ActiveModel {
            lead_id: Set(contact.lead_id.0),
            source_id: Set(contact.source_id.0),
            operator_id: Set(contact.operator_id.map(|id| id.0)),
            status: Set(ContactStatus::Active.to_string()),
            created_at: Set(Utc::now()),
            payload: Set(contact.payload.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError> {
        let result = contacts::Entity::find_by_id(id.0).one(&self.db).await?;
        Ok(result.map(|m| m.into()))
    }

    async fn update_status(
        &self,
        id: ContactId,
        status: ContactStatus,
    ) -> Result<Option<Contact>, DomainError> {
        let Some(existing) = contacts::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: contacts::ActiveModel = existing.into();
        model.status = Set(status.to_string());

        let result = model.update(&self.db).await?;
        Ok(Some(result.into()))
    }

    async fn count_active_by_operator(&self, operator_id: OperatorId) -> Result<u64, DomainError> {
        let count = contacts::Entity::find()
            .filter(contacts::Column::OperatorId.eq(operator_id.0))
            .filter(contacts::Column::Status.eq(ContactStatus::Active.to_string()))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let results = contacts::Entity::find()
            .order_by_asc(contacts::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn stats_by_operator(&self) -> Result<Vec<OperatorStats>, DomainError> {
        let rows = operators::Entity::find()
            .select_only()
            .column_as(operators::Column::Id, "operator_id")
            .column_as(operators::Column::Name, "operator_name")
            .column_as(
                Expr::col((contacts::Entity, contacts::Column::Id)).count(),
                "contacts_count",
            )
            .left_join(contacts::Entity)
            .group_by(operators::Column::Id)
            .group_by(operators::Column::Name)
            .order_by_asc(operators::Column::Id)
            .into_model::<OperatorCountRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| OperatorStats {
                operator_id: OperatorId(row.operator_id),
                operator_name: row.operator_name,
                contacts_count: row.contacts_count,
            })
            .collect())
    }

    async fn stats_by_source(&self) -> Result<Vec<SourceStats>, DomainError> {
        let rows = sources::Entity::find()
            .select_only()
            .column_as(sources::Column::Id, "source_id")
            .column_as(sources::Column::Name, "source_name")
            .column_as(
                Expr::col((contacts::Entity, contacts::Column::Id)).count(),
                "contacts_count",
            )
            .left_join(contacts::Entity)
            .group_by(sources::Column::Id)
            .group_by(sources::Column::Name)
            .order_by_asc(sources::Column::Id)
            .into_model::<SourceCountRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| SourceStats {
                source_id: SourceId(row.source_id),
                source_name: row.source_name,
                contacts_count: row.contacts_count,
            })
            .collect())
    }
}

impl From<contacts::Model> for Contact {
    fn from(model: contacts::Model) -> Self {
        Contact {
            id: ContactId(model.id),
            lead_id: LeadId(model.lead_id),
            source_id: SourceId(model.source_id),
            operator_id: model.operator_id.map(OperatorId),
            status: model.status.parse().unwrap_or(ContactStatus::Active),
            created_at: model.created_at,
            payload: model.payload,
        }
    }
}
