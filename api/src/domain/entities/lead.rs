//! Lead domain entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadId(pub i32);

impl From<i32> for LeadId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person reaching out, identified by an id from the outside world
/// (messenger user id, phone number, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: LeadId,
    pub external_id: String,
    pub name: Option<String>,
}

impl Lead {
    /// Name to store when a lead is seen again. Only fills a missing name.
    pub fn name_to_fill<'a>(&self, incoming: Option<&'a str>) -> Option<&'a str> {
        match (self.name.as_deref(), incoming) {
            (None | Some(""), Some(name)) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewLead {
    pub external_id: String,
    pub name: Option<String>,
}
