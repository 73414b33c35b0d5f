//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `distribution`: Weighted operator selection
//! - `ports`: Trait definitions for external dependencies

pub mod distribution;
pub mod entities;
pub mod ports;
