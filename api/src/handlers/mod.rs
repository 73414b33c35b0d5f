//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contacts;
pub mod leads;
pub mod operators;
pub mod sources;
pub mod stats;

pub use contacts::{create_contact, get_contact, update_contact_status};
pub use leads::list_leads;
pub use operators::{create_operator, get_operator, list_operators, update_operator};
pub use sources::{create_source, list_sources, list_weights_for_source, set_weight};
pub use stats::{stats_by_operator, stats_by_source};
