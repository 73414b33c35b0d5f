//! Contact service
//!
//! Registers incoming contacts and distributes them to operators.
//!
//! Distribution for a source:
//! 1. Take the active operators weighted for the source
//! 2. Drop zero weights and operators at their load limit
//! 3. Pick one at random, proportionally to weight
//!
//! A contact is stored even when nobody is available; it then has no operator.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::distribution::{pick_weighted, total_weight, Candidate};
use crate::domain::entities::{
    Contact, ContactDetails, ContactId, ContactStatus, Lead, NewContact, NewLead, Operator,
    SourceId,
};
use crate::domain::ports::{
    ContactRepository, LeadRepository, OperatorRepository, RandomSource, SourceRepository,
    WeightRepository,
};
use crate::error::{AppError, DomainError};

/// An incoming contact as reported by a source
#[derive(Debug, Clone)]
pub struct RegisterContact {
    pub lead_external_id: String,
    pub lead_name: Option<String>,
    pub source_id: SourceId,
    pub payload: Option<String>,
}

/// Service for contact registration and operator distribution
pub struct ContactService<OR, SR, WR, LR, CR, RS>
where
    OR: OperatorRepository,
    SR: SourceRepository,
    WR: WeightRepository,
    LR: LeadRepository,
    CR: ContactRepository,
    RS: RandomSource,
{
    operators: Arc<OR>,
    sources: Arc<SR>,
    weights: Arc<WR>,
    leads: Arc<LR>,
    contacts: Arc<CR>,
    random: Arc<RS>,
    /// Held from operator selection until the contact is stored, so two
    /// registrations cannot both take an operator's last free slot
    assign_lock: Mutex<()>,
}

impl<OR, SR, WR, LR, CR, RS> ContactService<OR, SR, WR, LR, CR, RS>
where
    OR: OperatorRepository,
    SR: SourceRepository,
    WR: WeightRepository,
    LR: LeadRepository,
    CR: ContactRepository,
    RS: RandomSource,
{
    pub fn new(
        operators: Arc<OR>,
        sources: Arc<SR>,
        weights: Arc<WR>,
        leads: Arc<LR>,
        contacts: Arc<CR>,
        random: Arc<RS>,
    ) -> Self {
        Self {
            operators,
            sources,
            weights,
            leads,
            contacts,
            random,
            assign_lock: Mutex::new(()),
        }
    }

    /// Find a lead by external id or create it.
    ///
    /// An existing lead without a name gets the supplied one; a known name is never overwritten.
    pub async fn get_or_create_lead(
        &self,
        external_id: &str,
        name: Option<&str>,
    ) -> Result<Lead, AppError> {
        if let Some(lead) = self.leads.find_by_external_id(external_id).await? {
            return match lead.name_to_fill(name) {
                Some(name) => Ok(self.leads.set_name(lead.id, name).await?),
                None => Ok(lead),
            };
        }

        let lead = self
            .leads
            .create(&NewLead {
                external_id: external_id.to_string(),
                name: name.filter(|n| !n.is_empty()).map(str::to_string),
            })
            .await?;
        tracing::debug!(lead_id = %lead.id, external_id, "Lead created");
        Ok(lead)
    }

    /// Pick an operator for a new contact from `source_id`, or `None` if nobody can take it
    pub async fn choose_operator_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Option<Operator>, AppError> {
        let weighted = self.weights.active_operators_for_source(source_id).await?;

        let mut candidates: Vec<Candidate> = Vec::with_capacity(weighted.len());
        for candidate in weighted {
            if candidate.weight <= 0 {
                continue;
            }
            let active = self
                .contacts
                .count_active_by_operator(candidate.operator.id)
                .await?;
            if candidate.operator.has_capacity(active) {
                candidates.push(candidate);
            } else {
                tracing::debug!(
                    operator_id = %candidate.operator.id,
                    active,
                    load_limit = candidate.operator.load_limit,
                    "Operator at load limit"
                );
            }
        }

        if candidates.is_empty() {
            return Ok(None);
        }

        let r = self.random.uniform(0.0, total_weight(&candidates));
        Ok(pick_weighted(&candidates, r).cloned())
    }

    /// Record a contact, assigning it to an operator when one is available
    pub async fn register(&self, request: RegisterContact) -> Result<ContactDetails, AppError> {
        let external_id = request.lead_external_id.as_str();
        if external_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "lead_external_id must not be empty".to_string(),
            )
            .into());
        }

        let source = self
            .sources
            .find_by_id(request.source_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Source not found".to_string()))?;

        let _guard = self.assign_lock.lock().await;

        let lead = self
            .get_or_create_lead(external_id, request.lead_name.as_deref())
            .await?;
        let operator = self.choose_operator_for_source(source.id).await?;

        let contact = self
            .contacts
            .create(&NewContact {
                lead_id: lead.id,
                source_id: source.id,
                operator_id: operator.as_ref().map(|o| o.id),
                payload: request.payload,
            })
            .await?;

        match &operator {
            Some(op) => tracing::info!(
                contact_id = %contact.id,
                lead_id = %lead.id,
                source_id = %source.id,
                operator_id = %op.id,
                "Contact assigned"
            ),
            None => tracing::warn!(
                contact_id = %contact.id,
                lead_id = %lead.id,
                source_id = %source.id,
                "No operator available, contact left unassigned"
            ),
        }

        Ok(ContactDetails {
            contact,
            lead,
            source,
            operator,
        })
    }

    pub async fn get(&self, id: ContactId) -> Result<ContactDetails, AppError> {
        let contact = self
            .contacts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;
        self.details(contact).await
    }

    /// Change a contact's status. Closing a contact frees a slot of its operator.
    pub async fn update_status(
        &self,
        id: ContactId,
        status: ContactStatus,
    ) -> Result<ContactDetails, AppError> {
        let contact = self
            .contacts
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

        tracing::info!(contact_id = %contact.id, status = %contact.status, "Contact status changed");
        self.details(contact).await
    }

    async fn details(&self, contact: Contact) -> Result<ContactDetails, AppError> {
        let lead = self
            .leads
            .find_by_id(contact.lead_id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "contact {} references missing lead {}",
                    contact.id, contact.lead_id
                ))
            })?;
        let source = self
            .sources
            .find_by_id(contact.source_id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "contact {} references missing source {}",
                    contact.id, contact.source_id
                ))
            })?;
        let operator = match contact.operator_id {
            Some(id) => self.operators.find_by_id(id).await?,
            None => None,
        };

        Ok(ContactDetails {
            contact,
            lead,
            source,
            operator,
        })
    }
}
