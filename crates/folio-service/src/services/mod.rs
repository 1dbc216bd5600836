//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod link;
pub mod merge;
pub mod profile;
pub mod signup;

#[cfg(test)]
pub mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use link::LinkService;
pub use profile::ProfileService;
pub use signup::{ReconciliationWarning, SignupService};
