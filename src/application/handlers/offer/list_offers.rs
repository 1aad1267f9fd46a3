//! ListOffersHandler - Query handler for the whole catalog.

use std::sync::Arc;

use super::OfferSummary;
use crate::domain::offer::OfferError;
use crate::ports::OfferCatalog;

/// Query to list every offer.
#[derive(Debug, Clone, Default)]
pub struct ListOffersQuery {
    /// Only include offers that cost something.
    pub paid_only: bool,
}

/// Result of listing offers, ordered by id.
pub type ListOffersResult = Vec<OfferSummary>;

pub struct ListOffersHandler {
    catalog: Arc<dyn OfferCatalog>,
}

impl ListOffersHandler {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListOffersQuery) -> Result<ListOffersResult, OfferError> {
        let offers = self.catalog.list().await?;

        Ok(offers
            .into_iter()
            .map(OfferSummary::from)
            .filter(|summary| !query.paid_only || !summary.is_free)
            .collect())
    }
}
