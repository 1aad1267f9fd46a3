//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
        }
    }
}

/// Machine-readable error codes, as sent in API error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors
    ValidationFailed,
    EmptyField,

    // Lookup
    OfferNotFound,

    // Pricing
    PeriodUnavailable,
    SubjectCountOutOfRange,
    PriceMismatch,

    // Catalog storage or seed file
    CatalogError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OfferNotFound => "OFFER_NOT_FOUND",
            ErrorCode::PeriodUnavailable => "PERIOD_UNAVAILABLE",
            ErrorCode::SubjectCountOutOfRange => "SUBJECT_COUNT_OUT_OF_RANGE",
            ErrorCode::PriceMismatch => "PRICE_MISMATCH",
            ErrorCode::CatalogError => "CATALOG_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Failure reported by a catalog port, with free-form details such as the
/// seed file path.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
