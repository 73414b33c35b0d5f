//! Report service
//!
//! Read-side views: leads with their contacts, and contact statistics.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Contact, LeadId, LeadWithContacts, OperatorStats, SourceStats};
use crate::domain::ports::{ContactRepository, LeadRepository};
use crate::error::AppError;

pub struct ReportService<LR, CR>
where
    LR: LeadRepository,
    CR: ContactRepository,
{
    leads: Arc<LR>,
    contacts: Arc<CR>,
}

impl<LR, CR> ReportService<LR, CR>
where
    LR: LeadRepository,
    CR: ContactRepository,
{
    pub fn new(leads: Arc<LR>, contacts: Arc<CR>) -> Self {
        Self { leads, contacts }
    }

    /// Every lead with all of its contacts, both in id order
    pub async fn leads_with_contacts(&self) -> Result<Vec<LeadWithContacts>, AppError> {
        let leads = self.leads.list().await?;

        let mut by_lead: HashMap<LeadId, Vec<Contact>> = HashMap::new();
        for contact in self.contacts.list().await? {
            by_lead.entry(contact.lead_id).or_default().push(contact);
        }

        Ok(leads
            .into_iter()
            .map(|lead| LeadWithContacts {
                contacts: by_lead.remove(&lead.id).unwrap_or_default(),
                lead,
            })
            .collect())
    }

    pub async fn stats_by_operator(&self) -> Result<Vec<OperatorStats>, AppError> {
        Ok(self.contacts.stats_by_operator().await?)
    }

    pub async fn stats_by_source(&self) -> Result<Vec<SourceStats>, AppError> {
        Ok(self.contacts.stats_by_source().await?)
    }
}
