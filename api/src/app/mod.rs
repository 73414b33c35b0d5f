//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod contact_service;
pub mod operator_service;
pub mod report_service;
pub mod source_service;

pub use contact_service::{ContactService, RegisterContact};
pub use operator_service::OperatorService;
pub use report_service::ReportService;
pub use source_service::SourceService;
