//! VerifyPurchaseHandler - Command handler re-checking a submitted total.
//!
//! The client-computed total is display-only. Before a purchase is accepted
//! the total is recomputed from the catalog offer; any difference rejects it.

use std::sync::Arc;

use crate::domain::offer::{OfferError, PurchaseRequest, PurchaseVerification};
use crate::ports::OfferCatalog;

/// Command to verify a purchase request.
#[derive(Debug, Clone)]
pub struct VerifyPurchaseCommand {
    pub request: PurchaseRequest,
}

pub type VerifyPurchaseResult = PurchaseVerification;

pub struct VerifyPurchaseHandler {
    catalog: Arc<dyn OfferCatalog>,
}

impl VerifyPurchaseHandler {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPurchaseCommand,
    ) -> Result<VerifyPurchaseResult, OfferError> {
        let request = cmd.request;
        let offer = self
            .catalog
            .find(&request.offer_id)
            .await?
            .ok_or_else(|| OfferError::not_found(request.offer_id.clone()))?;

        let verification = request.verify(&offer)?;

        if !verification.accepted {
            tracing::warn!(
                offer_id = %request.offer_id,
                submitted = verification.submitted_total,
                expected = verification.expected_total,
                "Purchase total mismatch"
            );
            return Err(OfferError::price_mismatch(
                verification.submitted_total,
                verification.expected_total,
            ));
        }

        tracing::info!(
            offer_id = %request.offer_id,
            total = verification.expected_total,
            "Purchase total verified"
        );

        Ok(verification)
    }
}
