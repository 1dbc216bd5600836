//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::AccountId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Link not found: {0}")]
    LinkNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Email address is not verified")]
    UnverifiedEmail,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Handle already taken: {0}")]
    HandleTaken(String),

    #[error("{0}")]
    DuplicateEmail(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Identity directory error: {0}")]
    DirectoryError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::LinkNotFound(_) => "UNKNOWN_LINK",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidHandle(_) => "INVALID_HANDLE",
            Self::UnverifiedEmail => "UNVERIFIED_EMAIL",

            // Conflict
            Self::HandleTaken(_) => "HANDLE_TAKEN",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::DirectoryError(_) => "DIRECTORY_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::ProfileNotFound(_) | Self::LinkNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidHandle(_) | Self::UnverifiedEmail
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::HandleTaken(_) | Self::DuplicateEmail(_))
    }
}
