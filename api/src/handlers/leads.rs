//! Lead listing

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::LeadWithContacts;
use crate::error::AppError;
use crate::handlers::contacts::ContactShortResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LeadWithContactsResponse {
    pub id: i32,
    pub external_id: String,
    pub name: Option<String>,
    pub contacts: Vec<ContactShortResponse>,
}

impl From<LeadWithContacts> for LeadWithContactsResponse {
    fn from(entry: LeadWithContacts) -> Self {
        Self {
            id: entry.lead.id.0,
            external_id: entry.lead.external_id,
            name: entry.lead.name,
            contacts: entry.contacts.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /leads
///
/// Every lead with the contacts it made.
pub async fn list_leads(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadWithContactsResponse>>, AppError> {
    let leads = state.report_service.leads_with_contacts().await?;
    Ok(Json(leads.into_iter().map(Into::into).collect()))
}
