//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Offer catalog implementations (in-memory, file-seeded)
//! - `http` - REST API

pub mod catalog;
pub mod http;

pub use catalog::InMemoryOfferCatalog;
