//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite/PostgreSQL).

use async_trait::async_trait;

use crate::domain::distribution::Candidate;
use crate::domain::entities::{
    Contact, ContactId, ContactStatus, Lead, LeadId, NewContact, NewLead, NewOperator, NewSource,
    Operator, OperatorId, OperatorSourceWeight, OperatorStats, OperatorUpdate, Source, SourceId,
    SourceStats, WeightAssignment,
};
use crate::error::DomainError;

/// Repository for Operator entities
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    async fn create(&self, operator: &NewOperator) -> Result<Operator, DomainError>;

    /// All operators, ordered by id
    async fn list(&self) -> Result<Vec<Operator>, DomainError>;

    async fn find_by_id(&self, id: OperatorId) -> Result<Option<Operator>, DomainError>;

    /// Apply a partial update. Returns `None` if the operator does not exist.
    async fn update(
        &self,
        id: OperatorId,
        update: &OperatorUpdate,
    ) -> Result<Option<Operator>, DomainError>;
}

/// Repository for Source entities
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Create a source. Duplicate name or code yields `AlreadyExists`.
    async fn create(&self, source: &NewSource) -> Result<Source, DomainError>;

    /// All sources, ordered by id
    async fn list(&self) -> Result<Vec<Source>, DomainError>;

    async fn find_by_id(&self, id: SourceId) -> Result<Option<Source>, DomainError>;
}

/// Repository for operator/source weights
#[async_trait]
pub trait WeightRepository: Send + Sync {
    /// Insert or update the weight of an (operator, source) pair
    async fn upsert(
        &self,
        assignment: &WeightAssignment,
    ) -> Result<OperatorSourceWeight, DomainError>;

    /// Weights of a source, ordered by id
    async fn list_by_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<OperatorSourceWeight>, DomainError>;

    /// Active operators weighted for a source, in weight-row order
    async fn active_operators_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<Candidate>, DomainError>;
}

/// Repository for Lead entities
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Lead>, DomainError>;

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError>;

    async fn create(&self, lead: &NewLead) -> Result<Lead, DomainError>;

    async fn set_name(&self, id: LeadId, name: &str) -> Result<Lead, DomainError>;

    /// All leads, ordered by id
    async fn list(&self) -> Result<Vec<Lead>, DomainError>;
}

/// Repository for Contact entities
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &NewContact) -> Result<Contact, DomainError>;

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError>;

    /// Set the status. Returns `None` if the contact does not exist.
    async fn update_status(
        &self,
        id: ContactId,
        status: ContactStatus,
    ) -> Result<Option<Contact>, DomainError>;

    /// Number of active contacts assigned to an operator
    async fn count_active_by_operator(&self, operator_id: OperatorId) -> Result<u64, DomainError>;

    /// All contacts, ordered by id
    async fn list(&self) -> Result<Vec<Contact>, DomainError>;

    /// Contact count per operator, including operators without contacts
    async fn stats_by_operator(&self) -> Result<Vec<OperatorStats>, DomainError>;

    /// Contact count per source, including sources without contacts
    async fn stats_by_source(&self) -> Result<Vec<SourceStats>, DomainError>;
}
