//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod rng;
pub mod sql;

pub use rng::ThreadRngSource;
pub use sql::{
    SqlContactRepository, SqlLeadRepository, SqlOperatorRepository, SqlSourceRepository,
    SqlWeightRepository,
};
