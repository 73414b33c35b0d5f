//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod contact;
pub mod lead;
pub mod operator;
pub mod source;
pub mod stats;
pub mod weight;

pub use contact::{
    Contact, ContactDetails, ContactId, ContactStatus, LeadWithContacts, NewContact,
};
pub use lead::{Lead, LeadId, NewLead};
pub use operator::{NewOperator, Operator, OperatorId, OperatorUpdate, DEFAULT_LOAD_LIMIT};
pub use source::{NewSource, Source, SourceId};
pub use stats::{OperatorStats, SourceStats};
pub use weight::{OperatorSourceWeight, WeightAssignment, WeightId};
