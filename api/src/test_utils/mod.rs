//! Test utilities
//!
//! Manual in-memory implementations of the port traits and test fixtures.
//!
//! Service tests run against the in-memory repositories; SQL adapter and HTTP
//! tests run against a fresh in-memory SQLite database from `test_db()`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
