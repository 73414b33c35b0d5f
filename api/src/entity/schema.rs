//! Schema bootstrap
//!
//! Creates missing tables and indexes at startup. Existing tables are left untouched.

use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use super::{contacts, leads, operator_source_weights, operators, sources};

/// Unique index over (operator_id, source_id) of the weights table
pub const UNIQUE_OPERATOR_SOURCE: &str = "uix_operator_source";

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Referenced tables first so foreign keys resolve
    create_table(db, operators::Entity).await?;
    create_table(db, sources::Entity).await?;
    create_table(db, leads::Entity).await?;
    create_table(db, operator_source_weights::Entity).await?;
    create_table(db, contacts::Entity).await?;

    let backend = db.get_database_backend();
    let index = Index::create()
        .name(UNIQUE_OPERATOR_SOURCE)
        .table(operator_source_weights::Entity)
        .col(operator_source_weights::Column::OperatorId)
        .col(operator_source_weights::Column::SourceId)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&index)).await?;

    tracing::debug!("Database schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
