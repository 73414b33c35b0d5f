//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::domain::entities::{Operator, OperatorId, Source, SourceId};
use crate::entity::create_tables;

/// Create an active operator
pub fn test_operator(id: i32, name: &str, load_limit: i32) -> Operator {
    Operator {
        id: OperatorId(id),
        name: name.to_string(),
        is_active: true,
        load_limit,
    }
}

/// Create a source with a code derived from its name
pub fn test_source(id: i32, name: &str) -> Source {
    Source {
        id: SourceId(id),
        name: name.to_string(),
        code: Some(name.to_lowercase().replace(' ', "_")),
    }
}

/// Fresh in-memory SQLite database with all tables created.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    create_tables(&db).await.expect("Failed to create tables");
    db
}
