//! Offer summary read model shared by offer queries.

use serde::Serialize;

use crate::domain::offer::{BillingPeriod, Offer, PeriodOption, PricingCalculator};

/// An offer together with what the purchase dialog needs to open.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub offer: Offer,
    pub is_free: bool,
    pub periods: Vec<PeriodOption>,
    /// First sold period, preselected in the dialog.
    pub default_period: Option<BillingPeriod>,
    pub max_subjects: u32,
}

impl From<Offer> for OfferSummary {
    fn from(offer: Offer) -> Self {
        Self {
            is_free: PricingCalculator::is_free_offer(&offer),
            periods: PricingCalculator::available_periods(&offer),
            default_period: PricingCalculator::default_period(&offer),
            max_subjects: offer.max_subjects(),
            offer,
        }
    }
}
