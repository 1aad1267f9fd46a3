//! Offer domain module.
//!
//! Pricing of subscription offers: per-period prices, subject bundling
//! multipliers and promo banner figures.
//!
//! # Module Structure
//!
//! - `period` - BillingPeriod cycles
//! - `offer` - Offer as received from the backend
//! - `multiplier` - Subject bundling multiplier table
//! - `calculator` - PricingCalculator, the pure pricing operations
//! - `quote` - PriceQuote and PeriodOption results
//! - `selection` - Buyer selection validation
//! - `purchase` - Purchase payload verification
//! - `errors` - OfferError

mod calculator;
mod errors;
mod multiplier;
mod offer;
mod period;
mod purchase;
mod quote;
mod selection;

pub use calculator::PricingCalculator;
pub use errors::OfferError;
pub use multiplier::subject_multiplier;
pub use offer::{Offer, DEFAULT_SUBJECT_COUNT};
pub use period::BillingPeriod;
pub use purchase::{PurchaseRequest, PurchaseVerification};
pub use quote::{PeriodOption, PriceQuote};
pub use selection::{Selection, ValidatedSelection};
