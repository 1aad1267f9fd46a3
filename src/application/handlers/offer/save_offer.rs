//! SaveOfferHandler - Command handler for creating or replacing an offer.

use std::sync::Arc;

use super::OfferSummary;
use crate::domain::foundation::OfferId;
use crate::domain::offer::{Offer, OfferError};
use crate::ports::OfferCatalog;

/// Command to store an offer under an id.
#[derive(Debug, Clone)]
pub struct SaveOfferCommand {
    pub offer_id: OfferId,
    pub offer: Offer,
}

/// Result of saving an offer.
pub type SaveOfferResult = OfferSummary;

/// Handler for offer management.
///
/// The id in the command wins over any id embedded in the offer body.
pub struct SaveOfferHandler {
    catalog: Arc<dyn OfferCatalog>,
}

impl SaveOfferHandler {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: SaveOfferCommand) -> Result<SaveOfferResult, OfferError> {
        let mut offer = cmd.offer;

        if let Some(title) = offer.title.as_deref() {
            let title = title.trim();
            if title.is_empty() {
                return Err(OfferError::validation("title", "Title cannot be blank"));
            }
            offer.title = Some(title.to_string());
        }

        let saved = self.catalog.save(cmd.offer_id.clone(), offer).await?;
        let summary = OfferSummary::from(saved);

        tracing::info!(
            offer_id = %cmd.offer_id,
            is_free = summary.is_free,
            periods = summary.periods.len(),
            "Offer saved"
        );

        Ok(summary)
    }
}
