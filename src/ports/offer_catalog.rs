//! Offer catalog port.
//!
//! Defines the contract for looking up the authoritative offers that
//! quotes and purchase verification are computed against.
//!
//! # Example
//!
//! ```ignore
//! use offer_pricing::ports::OfferCatalog;
//! use offer_pricing::domain::foundation::OfferId;
//!
//! async fn price_of(catalog: &dyn OfferCatalog, id: &OfferId) -> Result<f64, DomainError> {
//!     let offer = catalog.find(id).await?;
//!     Ok(offer.map(|o| o.monthly()).unwrap_or(0.0))
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OfferId};
use crate::domain::offer::Offer;

/// Port for reading and maintaining the offer catalog.
#[async_trait]
pub trait OfferCatalog: Send + Sync {
    /// Finds an offer by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(offer))` - Offer exists
    /// - `Ok(None)` - No offer with this id
    /// - `Err(DomainError)` - Infrastructure error occurred
    async fn find(&self, id: &OfferId) -> Result<Option<Offer>, DomainError>;

    /// Lists all offers ordered by id.
    async fn list(&self) -> Result<Vec<Offer>, DomainError>;

    /// Inserts or replaces the offer stored under `id`.
    ///
    /// The stored offer carries `id` regardless of the id it was given with.
    async fn save(&self, id: OfferId, offer: Offer) -> Result<Offer, DomainError>;
}
