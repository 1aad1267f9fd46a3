//! Ports - Interfaces between the domain and the outside world.
//!
//! - `offer_catalog` - Source of authoritative offers

mod offer_catalog;

pub use offer_catalog::OfferCatalog;
