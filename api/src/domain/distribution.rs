//! Weighted operator selection
//!
//! Given the operators eligible for a source and their weights, pick one with
//! probability proportional to its weight. The random draw is supplied by the
//! caller so the walk itself is deterministic.

use super::entities::Operator;

/// An operator eligible for a contact, with its weight for the contact's source
#[derive(Debug, Clone)]
pub struct Candidate {
    pub operator: Operator,
    pub weight: i32,
}

/// Sum of candidate weights
pub fn total_weight(candidates: &[Candidate]) -> f64 {
    candidates.iter().map(|c| f64::from(c.weight)).sum()
}

/// Walk the candidates with a running sum and return the first whose
/// cumulative weight reaches `r`, where `r` is drawn from `[0, total_weight]`.
/// Falls back to the last candidate if `r` overshoots (rounding).
pub fn pick_weighted(candidates: &[Candidate], r: f64) -> Option<&Operator> {
    let mut upto = 0.0;
    for candidate in candidates {
        let weight = f64::from(candidate.weight);
        if upto + weight >= r {
            return Some(&candidate.operator);
        }
        upto += weight;
    }
    candidates.last().map(|c| &c.operator)
}
