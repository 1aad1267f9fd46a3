//! Buyer selection and its validation against an offer.

use serde::{Deserialize, Serialize};

use super::{BillingPeriod, Offer, OfferError, PriceQuote, PricingCalculator};

/// A buyer's period and subject-count choice for one purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Chosen billing period. May be omitted for free offers.
    #[serde(default)]
    pub period: Option<BillingPeriod>,
    #[serde(default = "default_subject_count")]
    pub subject_count: u32,
}

fn default_subject_count() -> u32 {
    1
}

/// A selection that passed validation against its offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedSelection {
    /// The offer is free; nothing to choose.
    Free,
    /// A sold period and an allowed subject count.
    Paid {
        period: BillingPeriod,
        subject_count: u32,
    },
}

impl Selection {
    pub fn new(period: BillingPeriod, subject_count: u32) -> Self {
        Self {
            period: Some(period),
            subject_count,
        }
    }

    /// Checks the selection against the offer.
    ///
    /// # Errors
    ///
    /// - `PeriodUnavailable` if the period is missing or not sold
    /// - `SubjectCountOutOfRange` if the count is zero or above the
    ///   offer's cap (all-subjects offers ignore the count)
    pub fn validate(&self, offer: &Offer) -> Result<ValidatedSelection, OfferError> {
        if PricingCalculator::is_free_offer(offer) {
            return Ok(ValidatedSelection::Free);
        }

        let period = self
            .period
            .filter(|period| offer.price_for(*period) > 0.0)
            .ok_or_else(|| OfferError::period_unavailable(self.period))?;

        if offer.all_subjects {
            return Ok(ValidatedSelection::Paid {
                period,
                subject_count: 1,
            });
        }

        let max = offer.max_subjects();
        if self.subject_count == 0 || self.subject_count > max {
            return Err(OfferError::subject_count_out_of_range(
                self.subject_count,
                max,
            ));
        }

        Ok(ValidatedSelection::Paid {
            period,
            subject_count: self.subject_count,
        })
    }
}

impl ValidatedSelection {
    /// Prices the validated selection.
    pub fn quote(&self, offer: &Offer) -> PriceQuote {
        match self {
            ValidatedSelection::Free => PriceQuote::free(),
            ValidatedSelection::Paid {
                period,
                subject_count,
            } => PricingCalculator::quote(offer, *period, *subject_count),
        }
    }
}
