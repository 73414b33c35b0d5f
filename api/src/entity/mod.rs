//! SeaORM entities
//!
//! Table definitions backing the SQL adapters. Domain code never sees these types;
//! adapters convert them into `domain::entities`.

pub mod contacts;
pub mod leads;
pub mod operator_source_weights;
pub mod operators;
pub mod schema;
pub mod sources;

pub use schema::create_tables;
