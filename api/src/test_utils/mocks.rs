//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::distribution::Candidate;
use crate::domain::entities::{
    Contact, ContactId, ContactStatus, Lead, LeadId, NewContact, NewLead, NewOperator, NewSource,
    Operator, OperatorId, OperatorSourceWeight, OperatorStats, OperatorUpdate, Source, SourceId,
    SourceStats, WeightAssignment, WeightId,
};
use crate::domain::ports::{
    ContactRepository, LeadRepository, OperatorRepository, RandomSource, SourceRepository,
    WeightRepository,
};
use crate::error::DomainError;

/// Sequential id allocator starting at 1
#[derive(Debug)]
struct IdSeq(AtomicI32);

impl Default for IdSeq {
    fn default() -> Self {
        Self(AtomicI32::new(1))
    }
}

impl IdSeq {
    fn next(&self) -> i32 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// Make sure future ids are above `id`
    fn bump_past(&self, id: i32) {
        self.0.fetch_max(id + 1, Ordering::SeqCst);
    }
}

// ============================================================================
// In-Memory Operator Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOperatorRepository {
    operators: Arc<RwLock<BTreeMap<OperatorId, Operator>>>,
    ids: IdSeq,
}

impl InMemoryOperatorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an operator for testing
    pub fn with_operator(self, operator: Operator) -> Self {
        self.ids.bump_past(operator.id.0);
        self.operators
            .write()
            .unwrap()
            .insert(operator.id, operator);
        self
    }

    fn get(&self, id: OperatorId) -> Option<Operator> {
        self.operators.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl OperatorRepository for InMemoryOperatorRepository {
    async fn create(&self, operator: &NewOperator) -> Result<Operator, DomainError> {
        let operator = Operator {
            id: OperatorId(self.ids.next()),
            name: operator.name.clone(),
            is_active: true,
            load_limit: operator.load_limit,
        };
        self.operators
            .write()
            .unwrap()
            .insert(operator.id, operator.clone());
        Ok(operator)
    }

    async fn list(&self) -> Result<Vec<Operator>, DomainError> {
        Ok(self.operators.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: OperatorId) -> Result<Option<Operator>, DomainError> {
        Ok(self.get(id))
    }

    async fn update(
        &self,
        id: OperatorId,
        update: &OperatorUpdate,
    ) -> Result<Option<Operator>, DomainError> {
        let mut operators = self.operators.write().unwrap();
        Ok(operators.get_mut(&id).map(|operator| {
            update.apply(operator);
            operator.clone()
        }))
    }
}

// ============================================================================
// In-Memory Source Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySourceRepository {
    sources: Arc<RwLock<BTreeMap<SourceId, Source>>>,
    ids: IdSeq,
}

impl InMemorySourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a source for testing
    pub fn with_source(self, source: Source) -> Self {
        self.ids.bump_past(source.id.0);
        self.sources.write().unwrap().insert(source.id, source);
        self
    }
}

#[async_trait]
impl SourceRepository for InMemorySourceRepository {
    async fn create(&self, source: &NewSource) -> Result<Source, DomainError> {
        let mut sources = self.sources.write().unwrap();
        let duplicate = sources.values().any(|s| {
            s.name == source.name || (source.code.is_some() && s.code == source.code)
        });
        if duplicate {
            return Err(DomainError::AlreadyExists(format!(
                "Source '{}' already exists",
                source.name
            )));
        }

        let source = Source {
            id: SourceId(self.ids.next()),
            name: source.name.clone(),
            code: source.code.clone(),
        };
        sources.insert(source.id, source.clone());
        Ok(source)
    }

    async fn list(&self) -> Result<Vec<Source>, DomainError> {
        Ok(self.sources.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: SourceId) -> Result<Option<Source>, DomainError> {
        Ok(self.sources.read().unwrap().get(&id).cloned())
    }
}

// ============================================================================
// In-Memory Weight Repository
// ============================================================================

/// Resolves operators through the shared operator repository, like a SQL join would
pub struct InMemoryWeightRepository {
    weights: Arc<RwLock<Vec<OperatorSourceWeight>>>,
    operators: Arc<InMemoryOperatorRepository>,
    ids: IdSeq,
}

impl InMemoryWeightRepository {
    pub fn new(operators: Arc<InMemoryOperatorRepository>) -> Self {
        Self {
            weights: Arc::new(RwLock::new(Vec::new())),
            operators,
            ids: IdSeq::default(),
        }
    }
}

#[async_trait]
impl WeightRepository for InMemoryWeightRepository {
    async fn upsert(
        &self,
        assignment: &WeightAssignment,
    ) -> Result<OperatorSourceWeight, DomainError> {
        let mut weights = self.weights.write().unwrap();
        if let Some(existing) = weights.iter_mut().find(|w| {
            w.operator_id == assignment.operator_id && w.source_id == assignment.source_id
        }) {
            existing.weight = assignment.weight;
            return Ok(existing.clone());
        }

        let weight = OperatorSourceWeight {
            id: WeightId(self.ids.next()),
            operator_id: assignment.operator_id,
            source_id: assignment.source_id,
            weight: assignment.weight,
        };
        weights.push(weight.clone());
        Ok(weight)
    }

    async fn list_by_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<OperatorSourceWeight>, DomainError> {
        let weights = self.weights.read().unwrap();
        Ok(weights
            .iter()
            .filter(|w| w.source_id == source_id)
            .cloned()
            .collect())
    }

    async fn active_operators_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<Candidate>, DomainError> {
        let weights = self.weights.read().unwrap();
        Ok(weights
            .iter()
            .filter(|w| w.source_id == source_id)
            .filter_map(|w| {
                self.operators
                    .get(w.operator_id)
                    .filter(|op| op.is_active)
                    .map(|operator| Candidate {
                        operator,
                        weight: w.weight,
                    })
            })
            .collect())
    }
}

// ============================================================================
// In-Memory Lead Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<BTreeMap<LeadId, Lead>>>,
    ids: IdSeq,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Lead>, DomainError> {
        let leads = self.leads.read().unwrap();
        Ok(leads
            .values()
            .find(|l| l.external_id == external_id)
            .cloned())
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError> {
        Ok(self.leads.read().unwrap().get(&id).cloned())
    }

    async fn create(&self, lead: &NewLead) -> Result<Lead, DomainError> {
        let mut leads = self.leads.write().unwrap();
        if leads.values().any(|l| l.external_id == lead.external_id) {
            return Err(DomainError::AlreadyExists(format!(
                "Lead '{}' already exists",
                lead.external_id
            )));
        }

        let lead = Lead {
            id: LeadId(self.ids.next()),
            external_id: lead.external_id.clone(),
            name: lead.name.clone(),
        };
        leads.insert(lead.id, lead.clone());
        Ok(lead)
    }

    async fn set_name(&self, id: LeadId, name: &str) -> Result<Lead, DomainError> {
        let mut leads = self.leads.write().unwrap();
        let lead = leads
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Lead {} not found", id)))?;
        lead.name = Some(name.to_string());
        Ok(lead.clone())
    }

    async fn list(&self) -> Result<Vec<Lead>, DomainError> {
        Ok(self.leads.read().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// In-Memory Contact Repository
// ============================================================================

/// Statistics need the operator and source tables; attach them with `with_catalog`
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<BTreeMap<ContactId, Contact>>>,
    ids: IdSeq,
    operators: Option<Arc<InMemoryOperatorRepository>>,
    sources: Option<Arc<InMemorySourceRepository>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(
        mut self,
        operators: Arc<InMemoryOperatorRepository>,
        sources: Arc<InMemorySourceRepository>,
    ) -> Self {
        self.operators = Some(operators);
        self.sources = Some(sources);
        self
    }

    fn count_by<K: Ord>(&self, key: impl Fn(&Contact) -> Option<K>) -> BTreeMap<K, i64> {
        let mut counts = BTreeMap::new();
        for contact in self.contacts.read().unwrap().values() {
            if let Some(k) = key(contact) {
                *counts.entry(k).or_default() += 1;
            }
        }
        counts
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: &NewContact) -> Result<Contact, DomainError> {
        let contact = Contact {
            id: ContactId(self.ids.next()),
            lead_id: contact.lead_id,
            source_id: contact.source_id,
            operator_id: contact.operator_id,
            status: ContactStatus::Active,
            created_at: Utc::now(),
            payload: contact.payload.clone(),
        };
        self.contacts
            .write()
            .unwrap()
            .insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError> {
        Ok(self.contacts.read().unwrap().get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: ContactId,
        status: ContactStatus,
    ) -> Result<Option<Contact>, DomainError> {
        let mut contacts = self.contacts.write().unwrap();
        Ok(contacts.get_mut(&id).map(|contact| {
            contact.status = status;
            contact.clone()
        }))
    }

    async fn count_active_by_operator(&self, operator_id: OperatorId) -> Result<u64, DomainError> {
        let contacts = self.contacts.read().unwrap();
        Ok(contacts
            .values()
            .filter(|c| c.operator_id == Some(operator_id) && c.status == ContactStatus::Active)
            .count() as u64)
    }

    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        Ok(self.contacts.read().unwrap().values().cloned().collect())
    }

    async fn stats_by_operator(&self) -> Result<Vec<OperatorStats>, DomainError> {
        let operators = self.operators.as_ref().ok_or_else(|| {
            DomainError::Internal("operator stats need with_catalog".to_string())
        })?;
        let counts = self.count_by(|c| c.operator_id);
        Ok(operators
            .list()
            .await?
            .into_iter()
            .map(|op| OperatorStats {
                operator_id: op.id,
                contacts_count: counts.get(&op.id).copied().unwrap_or(0),
                operator_name: op.name,
            })
            .collect())
    }

    async fn stats_by_source(&self) -> Result<Vec<SourceStats>, DomainError> {
        let sources = self
            .sources
            .as_ref()
            .ok_or_else(|| DomainError::Internal("source stats need with_catalog".to_string()))?;
        let counts = self.count_by(|c| Some(c.source_id));
        Ok(sources
            .list()
            .await?
            .into_iter()
            .map(|source| SourceStats {
                source_id: source.id,
                contacts_count: counts.get(&source.id).copied().unwrap_or(0),
                source_name: source.name,
            })
            .collect())
    }
}

// ============================================================================
// Fixed Random Source
// ============================================================================

/// Returns a preset value and records the requested range
pub struct FixedRandom {
    value: Mutex<f64>,
    last_range: Mutex<Option<(f64, f64)>>,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self {
            value: Mutex::new(value),
            last_range: Mutex::new(None),
        }
    }

    pub fn set(&self, value: f64) {
        *self.value.lock().unwrap() = value;
    }

    pub fn last_range(&self) -> Option<(f64, f64)> {
        *self.last_range.lock().unwrap()
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        *self.last_range.lock().unwrap() = Some((low, high));
        *self.value.lock().unwrap()
    }
}
