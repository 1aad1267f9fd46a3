//! HTTP DTOs (Data Transfer Objects) for offer pricing endpoints.
//!
//! These types define the JSON request/response structure for the pricing API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::offer::{BillingPeriod, Offer, PeriodOption, Selection};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to price a selection of a catalog offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub period: Option<BillingPeriod>,
    #[serde(default = "default_subject_count")]
    pub subject_count: u32,
}

impl From<QuoteRequest> for Selection {
    fn from(request: QuoteRequest) -> Self {
        Selection {
            period: request.period,
            subject_count: request.subject_count,
        }
    }
}

/// Request to price an offer supplied inline, for display.
///
/// The period is a raw code; unknown codes price as monthly. No selection
/// validation is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineQuoteRequest {
    pub offer: Offer,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default = "default_subject_count")]
    pub subject_count: u32,
}

fn default_subject_count() -> u32 {
    1
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Purchasable periods of an offer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodsResponse {
    pub periods: Vec<PeriodOption>,
    pub default_period: Option<BillingPeriod>,
    pub is_free: bool,
}

/// Standard error response format.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
