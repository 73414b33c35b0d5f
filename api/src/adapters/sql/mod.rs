//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs on
//! SQLite (default) and PostgreSQL, selected by the connection URL.

pub mod contact_repo;
pub mod lead_repo;
pub mod operator_repo;
pub mod source_repo;
pub mod weight_repo;


pub use contact_repo::SqlContactRepository;
pub use lead_repo::SqlLeadRepository;
pub use operator_repo::SqlOperatorRepository;
pub use source_repo::SqlSourceRepository;
pub use weight_repo::SqlWeightRepository;
