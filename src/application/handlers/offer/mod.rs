//! Offer handlers.
//!
//! ## Commands
//! - Saving (creating or replacing) catalog offers
//! - Verifying a submitted purchase total
//!
//! ## Queries
//! - Get one offer with its purchasable periods
//! - List offers
//! - Quote a buyer's selection

mod get_offer;
mod list_offers;
mod quote_offer;
mod save_offer;
mod summary;
mod verify_purchase;

pub use summary::OfferSummary;

// Commands
pub use save_offer::{SaveOfferCommand, SaveOfferHandler, SaveOfferResult};
pub use verify_purchase::{VerifyPurchaseCommand, VerifyPurchaseHandler, VerifyPurchaseResult};

// Queries
pub use get_offer::{GetOfferHandler, GetOfferQuery, GetOfferResult};
pub use list_offers::{ListOffersHandler, ListOffersQuery, ListOffersResult};
pub use quote_offer::{QuoteOfferHandler, QuoteOfferQuery, QuoteOfferResult};
