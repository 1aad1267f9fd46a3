//! Offer-specific error types.
//!
//! The calculator itself never fails; these errors come from selection
//! validation, purchase verification and catalog lookups.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | PeriodUnavailable | 400 |
//! | SubjectCountOutOfRange | 400 |
//! | ValidationFailed | 400 |
//! | PriceMismatch | 422 |
//! | Infrastructure | 500 |

use super::BillingPeriod;
use crate::domain::foundation::{DomainError, ErrorCode, OfferId, ValidationError};

/// Offer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferError {
    /// No offer with this id in the catalog.
    NotFound(OfferId),

    /// The offer does not sell the selected period.
    PeriodUnavailable {
        period: Option<BillingPeriod>,
    },

    /// Subject count outside `1..=max`.
    SubjectCountOutOfRange {
        requested: u32,
        max: u32,
    },

    /// Submitted total differs from the recomputed one.
    PriceMismatch {
        submitted: u64,
        expected: u64,
    },

    /// Validation failed.
    ValidationFailed {
        field: String,
        message: String,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl OfferError {
    pub fn not_found(id: OfferId) -> Self {
        OfferError::NotFound(id)
    }

    pub fn period_unavailable(period: Option<BillingPeriod>) -> Self {
        OfferError::PeriodUnavailable { period }
    }

    pub fn subject_count_out_of_range(requested: u32, max: u32) -> Self {
        OfferError::SubjectCountOutOfRange { requested, max }
    }

    pub fn price_mismatch(submitted: u64, expected: u64) -> Self {
        OfferError::PriceMismatch {
            submitted,
            expected,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OfferError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        OfferError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OfferError::NotFound(_) => ErrorCode::OfferNotFound,
            OfferError::PeriodUnavailable { .. } => ErrorCode::PeriodUnavailable,
            OfferError::SubjectCountOutOfRange { .. } => ErrorCode::SubjectCountOutOfRange,
            OfferError::PriceMismatch { .. } => ErrorCode::PriceMismatch,
            OfferError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OfferError::Infrastructure(_) => ErrorCode::CatalogError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            OfferError::NotFound(id) => format!("Offer not found: {}", id),
            OfferError::PeriodUnavailable { period: Some(period) } => {
                format!("Offer is not sold for the {} period", period)
            }
            OfferError::PeriodUnavailable { period: None } => {
                "A billing period must be selected".to_string()
            }
            OfferError::SubjectCountOutOfRange { requested, max } => {
                format!(
                    "Subject count must be between 1 and {}, got {}",
                    max, requested
                )
            }
            OfferError::PriceMismatch {
                submitted,
                expected,
            } => format!(
                "Submitted total {} does not match computed total {}",
                submitted, expected
            ),
            OfferError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OfferError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OfferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OfferError {}

/// Catalog failures. Only validation and storage codes come out of a
/// catalog port; pricing outcomes are decided in this module.
impl From<DomainError> for OfferError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField => OfferError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::CatalogError
            | ErrorCode::OfferNotFound
            | ErrorCode::PeriodUnavailable
            | ErrorCode::SubjectCountOutOfRange
            | ErrorCode::PriceMismatch => OfferError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for OfferError {
    fn from(err: ValidationError) -> Self {
        OfferError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
