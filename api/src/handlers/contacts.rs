//! Contact handlers
//!
//! Registration of incoming contacts and status changes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::RegisterContact;
use crate::domain::entities::{Contact, ContactDetails, ContactId, ContactStatus, Lead, SourceId};
use crate::error::AppError;
use crate::handlers::operators::OperatorResponse;
use crate::handlers::sources::SourceResponse;
use crate::AppState;

/// An incoming contact. `lead_external_id` identifies the lead across contacts.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub lead_external_id: String,
    pub lead_name: Option<String>,
    pub source_id: i32,
    pub payload: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: i32,
    pub external_id: String,
    pub name: Option<String>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.0,
            external_id: lead.external_id,
            name: lead.name,
        }
    }
}

/// A contact as listed under its lead
#[derive(Debug, Serialize)]
pub struct ContactShortResponse {
    pub id: i32,
    pub source_id: i32,
    pub operator_id: Option<i32>,
    pub status: ContactStatus,
    pub created_at: String,
}

impl From<Contact> for ContactShortResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.0,
            source_id: contact.source_id.0,
            operator_id: contact.operator_id.map(|id| id.0),
            status: contact.status,
            created_at: contact.created_at.to_rfc3339(),
        }
    }
}

/// A contact with its lead, source and operator embedded
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i32,
    pub status: ContactStatus,
    pub created_at: String,
    pub payload: Option<String>,
    pub lead: LeadResponse,
    pub source: SourceResponse,
    pub operator: Option<OperatorResponse>,
}

impl From<ContactDetails> for ContactResponse {
    fn from(details: ContactDetails) -> Self {
        Self {
            id: details.contact.id.0,
            status: details.contact.status,
            created_at: details.contact.created_at.to_rfc3339(),
            payload: details.contact.payload,
            lead: details.lead.into(),
            source: details.source.into(),
            operator: details.operator.map(Into::into),
        }
    }
}

/// POST /contacts
///
/// Register a contact and assign it to an operator when one is available.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let details = state
        .contact_service
        .register(RegisterContact {
            lead_external_id: request.lead_external_id,
            lead_name: request.lead_name,
            source_id: SourceId(request.source_id),
            payload: request.payload,
        })
        .await?;

    Ok(Json(details.into()))
}

/// GET /contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ContactResponse>, AppError> {
    let details = state.contact_service.get(ContactId(id)).await?;
    Ok(Json(details.into()))
}

/// PATCH /contacts/:id
pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateContactStatusRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let details = state
        .contact_service
        .update_status(ContactId(id), request.status)
        .await?;

    Ok(Json(details.into()))
}
