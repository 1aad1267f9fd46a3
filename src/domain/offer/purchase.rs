//! Purchase request payload and server-side total verification.
//!
//! The UI computes a total for display and submits it with the purchase.
//! That figure is advisory: the total is recomputed from the catalog offer
//! and the submitted one is only compared against it.

use serde::{Deserialize, Serialize};

use super::{BillingPeriod, Offer, OfferError, PriceQuote, Selection};
use crate::domain::foundation::OfferId;

/// Purchase payload sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub offer_id: OfferId,
    #[serde(default)]
    pub period: Option<BillingPeriod>,
    #[serde(default = "default_subject_count")]
    pub subject_count: u32,
    /// Total the client displayed to the buyer.
    pub total_price: u64,
}

fn default_subject_count() -> u32 {
    1
}

/// Outcome of checking a purchase request against the authoritative price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseVerification {
    pub accepted: bool,
    pub expected_total: u64,
    pub submitted_total: u64,
    pub quote: PriceQuote,
}

impl PurchaseRequest {
    /// The buyer's selection carried by this request.
    pub fn selection(&self) -> Selection {
        Selection {
            period: self.period,
            subject_count: self.subject_count,
        }
    }

    /// Recomputes the total for `offer` and compares it with the submitted one.
    ///
    /// # Errors
    ///
    /// Returns the selection validation error when the period or subject
    /// count is not purchasable. A mismatching total is not an error here;
    /// it is reported through `accepted`.
    pub fn verify(&self, offer: &Offer) -> Result<PurchaseVerification, OfferError> {
        let quote = self.selection().validate(offer)?.quote(offer);
        Ok(PurchaseVerification {
            accepted: quote.total_price == self.total_price,
            expected_total: quote.total_price,
            submitted_total: self.total_price,
            quote,
        })
    }
}
