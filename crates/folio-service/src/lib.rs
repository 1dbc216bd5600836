//! # folio-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    LinkService, ProfileService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SignupService,
};
