//! Contact domain entity
//!
//! A single reach-out of a lead through a source, optionally assigned to an operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lead::{Lead, LeadId};
use super::operator::{Operator, OperatorId};
use super::source::{Source, SourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(pub i32);

impl From<i32> for ContactId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact status. Only active contacts count toward an operator's load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Closed,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::Active => write!(f, "active"),
            ContactStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ContactStatus::Active),
            "closed" => Ok(ContactStatus::Closed),
            _ => Err(format!("Unknown contact status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub lead_id: LeadId,
    pub source_id: SourceId,
    /// `None` when no operator had capacity at registration time
    pub operator_id: Option<OperatorId>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub payload: Option<String>,
}

/// Data needed to store a contact
#[derive(Debug, Clone)]
pub struct NewContact {
    pub lead_id: LeadId,
    pub source_id: SourceId,
    pub operator_id: Option<OperatorId>,
    pub payload: Option<String>,
}

/// A contact with its lead, source and operator resolved
#[derive(Debug, Clone)]
pub struct ContactDetails {
    pub contact: Contact,
    pub lead: Lead,
    pub source: Source,
    pub operator: Option<Operator>,
}

/// A lead together with all of its contacts
#[derive(Debug, Clone)]
pub struct LeadWithContacts {
    pub lead: Lead,
    pub contacts: Vec<Contact>,
}
