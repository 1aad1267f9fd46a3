//! Pricing result value objects.

use serde::{Deserialize, Serialize};

use super::BillingPeriod;
use crate::domain::foundation::Percentage;

/// A purchasable period of an offer, as shown in the period picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodOption {
    pub period: BillingPeriod,
    pub label: String,
    pub price: f64,
}

/// Every figure needed to display or submit a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Selected period. `None` for free offers.
    pub period: Option<BillingPeriod>,
    /// Subject count the multiplier was taken for.
    pub subject_count: u32,
    /// Price of one billing cycle for the selected period.
    pub unit_price: f64,
    /// Subject bundling multiplier.
    pub multiplier: f64,
    /// Amount due, floored.
    pub total_price: u64,
    /// Linear monthly-rate equivalent shown crossed out in the promo banner.
    pub original_price: u64,
    /// Whether the promo banner should show.
    pub has_promo: bool,
    /// `original_price - total_price` when a promo applies, else zero.
    pub savings: u64,
    /// Savings relative to the original price.
    pub savings_percent: Percentage,
    pub is_free: bool,
}

impl PriceQuote {
    /// The quote for a free offer: nothing to pay, nothing to save.
    pub fn free() -> Self {
        Self {
            period: None,
            subject_count: 0,
            unit_price: 0.0,
            multiplier: 0.0,
            total_price: 0,
            original_price: 0,
            has_promo: false,
            savings: 0,
            savings_percent: Percentage::ZERO,
            is_free: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_quote_is_all_zero() {
        let quote = PriceQuote::free();
        assert!(quote.is_free);
        assert!(!quote.has_promo);
        assert_eq!(quote.total_price, 0);
        assert_eq!(quote.period, None);
    }

    #[test]
    fn quote_serializes_camel_case() {
        let json = serde_json::to_value(PriceQuote::free()).unwrap();
        assert_eq!(json["totalPrice"], 0);
        assert_eq!(json["hasPromo"], false);
        assert_eq!(json["savingsPercent"], 0);
        assert!(json["period"].is_null());
    }
}
