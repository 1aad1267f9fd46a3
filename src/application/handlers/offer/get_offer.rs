//! GetOfferHandler - Query handler for a single catalog offer.

use std::sync::Arc;

use super::OfferSummary;
use crate::domain::foundation::OfferId;
use crate::domain::offer::OfferError;
use crate::ports::OfferCatalog;

/// Query to get one offer.
#[derive(Debug, Clone)]
pub struct GetOfferQuery {
    pub offer_id: OfferId,
}

/// Result of successful offer query.
pub type GetOfferResult = OfferSummary;

/// Handler for retrieving an offer with its purchasable periods.
pub struct GetOfferHandler {
    catalog: Arc<dyn OfferCatalog>,
}

impl GetOfferHandler {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetOfferQuery) -> Result<GetOfferResult, OfferError> {
        let offer = self
            .catalog
            .find(&query.offer_id)
            .await?
            .ok_or_else(|| OfferError::not_found(query.offer_id.clone()))?;

        Ok(OfferSummary::from(offer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryOfferCatalog;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::offer::{BillingPeriod, Offer};
    use async_trait::async_trait;

    struct FailingCatalog;

    #[async_trait]
    impl OfferCatalog for FailingCatalog {
        async fn find(&self, _id: &OfferId) -> Result<Option<Offer>, DomainError> {
            Err(DomainError::new(ErrorCode::CatalogError, "Simulated read failure"))
        }

        async fn list(&self) -> Result<Vec<Offer>, DomainError> {
            Err(DomainError::new(ErrorCode::CatalogError, "Simulated read failure"))
        }

        async fn save(&self, _id: OfferId, _offer: Offer) -> Result<Offer, DomainError> {
            Err(DomainError::new(ErrorCode::CatalogError, "Simulated write failure"))
        }
    }

    fn offer_id() -> OfferId {
        OfferId::new("bac-math").unwrap()
    }

    #[tokio::test]
    async fn returns_summary_for_existing_offer() {
        let catalog = InMemoryOfferCatalog::with_offers(vec![Offer::with_period_prices(
            100.0, 270.0, 500.0, 900.0,
        )
        .with_id(offer_id())])
        .unwrap();
        let handler = GetOfferHandler::new(Arc::new(catalog));

        let summary = handler
            .handle(GetOfferQuery { offer_id: offer_id() })
            .await
            .unwrap();

        assert!(!summary.is_free);
        assert_eq!(summary.periods.len(), 4);
        assert_eq!(summary.default_period, Some(BillingPeriod::Monthly));
    }

    #[tokio::test]
    async fn missing_offer_is_not_found() {
        let handler = GetOfferHandler::new(Arc::new(InMemoryOfferCatalog::new()));
        let result = handler.handle(GetOfferQuery { offer_id: offer_id() }).await;
        assert_eq!(result, Err(OfferError::not_found(offer_id())));
    }

    #[tokio::test]
    async fn catalog_failure_is_infrastructure_error() {
        let handler = GetOfferHandler::new(Arc::new(FailingCatalog));
        let result = handler.handle(GetOfferQuery { offer_id: offer_id() }).await;
        assert!(matches!(result, Err(OfferError::Infrastructure(_))));
    }
}
