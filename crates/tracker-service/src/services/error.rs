//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;

use tracker_core::{DomainError, FieldErrors};
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (unknown ids, vote state, field validation)
    Domain(DomainError),

    /// Wiring error while assembling services
    Config(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl ServiceError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(e) if e.is_conflict() => 409,
            Self::Domain(_) | Self::Config(_) => 500,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Per-field messages of a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Domain(e) => e.field_errors(),
            Self::Config(_) => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Domain(DomainError::Validation(collect_field_errors(&errors)))
    }
}

/// Flatten validator output into `field -> [message]`
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            let message = err
                .message
                .as_ref()
                .map_or_else(|| err.code.to_string(), ToString::to_string);
            fields.add(field.to_string(), message);
        }
    }
    fields
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
