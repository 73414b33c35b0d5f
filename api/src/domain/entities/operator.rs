//! Operator domain entity
//!
//! Represents a staff member that incoming contacts are distributed to.

use serde::{Deserialize, Serialize};

/// Unique identifier for an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorId(pub i32);

impl From<i32> for OperatorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OperatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load limit used when none is given on creation
pub const DEFAULT_LOAD_LIMIT: i32 = 10;

/// An operator handling contacts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operator {
    pub id: OperatorId,
    pub name: String,
    /// Inactive operators never receive new contacts
    pub is_active: bool,
    /// Maximum number of simultaneously active contacts
    pub load_limit: i32,
}

impl Operator {
    /// Whether the operator can take one more contact given its current active load
    pub fn has_capacity(&self, active_contacts: u64) -> bool {
        self.load_limit > 0 && active_contacts < self.load_limit as u64
    }
}

/// Data needed to create a new operator
#[derive(Debug, Clone)]
pub struct NewOperator {
    pub name: String,
    pub load_limit: i32,
}

impl NewOperator {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Operator name must not be empty".to_string());
        }
        validate_load_limit(self.load_limit)
    }
}

/// Partial update of an operator; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct OperatorUpdate {
    pub load_limit: Option<i32>,
    pub is_active: Option<bool>,
}

impl OperatorUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match self.load_limit {
            Some(limit) => validate_load_limit(limit),
            None => Ok(()),
        }
    }

    pub fn apply(&self, operator: &mut Operator) {
        if let Some(limit) = self.load_limit {
            operator.load_limit = limit;
        }
        if let Some(active) = self.is_active {
            operator.is_active = active;
        }
    }
}

fn validate_load_limit(limit: i32) -> Result<(), String> {
    if limit < 0 {
        return Err(format!("load_limit must be >= 0, got {}", limit));
    }
    Ok(())
}
