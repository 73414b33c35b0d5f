//! Aggregated contact counts

use serde::Serialize;

use super::operator::OperatorId;
use super::source::SourceId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorStats {
    pub operator_id: OperatorId,
    pub operator_name: String,
    pub contacts_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    pub source_id: SourceId,
    pub source_name: String,
    pub contacts_count: i64,
}
