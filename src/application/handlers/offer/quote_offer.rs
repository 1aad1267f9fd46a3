//! QuoteOfferHandler - Query handler pricing a selection of a catalog offer.

use std::sync::Arc;

use crate::domain::foundation::OfferId;
use crate::domain::offer::{OfferError, PriceQuote, Selection};
use crate::ports::OfferCatalog;

/// Query to price a buyer's selection.
#[derive(Debug, Clone)]
pub struct QuoteOfferQuery {
    pub offer_id: OfferId,
    pub selection: Selection,
}

pub type QuoteOfferResult = PriceQuote;

/// Handler for pricing a validated selection against the catalog offer.
pub struct QuoteOfferHandler {
    catalog: Arc<dyn OfferCatalog>,
}

impl QuoteOfferHandler {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: QuoteOfferQuery) -> Result<QuoteOfferResult, OfferError> {
        let offer = self
            .catalog
            .find(&query.offer_id)
            .await?
            .ok_or_else(|| OfferError::not_found(query.offer_id.clone()))?;

        let quote = query.selection.validate(&offer)?.quote(&offer);

        tracing::debug!(
            offer_id = %query.offer_id,
            period = ?quote.period,
            subject_count = quote.subject_count,
            total = quote.total_price,
            "Quoted offer"
        );

        Ok(quote)
    }
}
