//! Operator/source weight
//!
//! The relative share of a source's contacts an operator receives.

use serde::{Deserialize, Serialize};

use super::operator::OperatorId;
use super::source::SourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightId(pub i32);

impl From<i32> for WeightId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Weight of one operator for one source. At most one per (operator, source) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorSourceWeight {
    pub id: WeightId,
    pub operator_id: OperatorId,
    pub source_id: SourceId,
    pub weight: i32,
}

/// Requested weight for an (operator, source) pair
#[derive(Debug, Clone)]
pub struct WeightAssignment {
    pub operator_id: OperatorId,
    pub source_id: SourceId,
    pub weight: i32,
}

impl WeightAssignment {
    pub fn validate(&self) -> Result<(), String> {
        if self.weight < 0 {
            return Err(format!("weight must be >= 0, got {}", self.weight));
        }
        Ok(())
    }
}
