//! In-Memory Offer Catalog Adapter
//!
//! Keeps offers in memory, optionally seeded from a JSON or YAML file
//! containing an array of offers. Useful for development, tests and
//! deployments where the offer list is shipped with the service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OfferId, ValidationError};
use crate::domain::offer::Offer;
use crate::ports::OfferCatalog;

/// In-memory storage for offers, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferCatalog {
    offers: Arc<RwLock<HashMap<OfferId, Offer>>>,
}

impl InMemoryOfferCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `offers`.
    ///
    /// Every offer must carry an id; later duplicates replace earlier ones.
    pub fn with_offers(offers: Vec<Offer>) -> Result<Self, ValidationError> {
        let mut map = HashMap::with_capacity(offers.len());
        for offer in offers {
            let id = offer
                .id
                .clone()
                .ok_or_else(|| ValidationError::empty_field("offer_id"))?;
            map.insert(id, offer);
        }
        Ok(Self {
            offers: Arc::new(RwLock::new(map)),
        })
    }

    /// Load a catalog from a seed file.
    ///
    /// `.yaml` / `.yml` files are parsed as YAML, anything else as JSON.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::CatalogError,
                format!("Failed to read catalog file: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })?;

        let offers = parse_offers(path, &contents)?;
        let catalog = Self::with_offers(offers)?;
        tracing::info!(
            path = %path.display(),
            offers = catalog.len().await,
            "Loaded offer catalog"
        );
        Ok(catalog)
    }

    /// Get the number of stored offers
    pub async fn len(&self) -> usize {
        self.offers.read().await.len()
    }

    /// Whether the catalog holds no offers
    pub async fn is_empty(&self) -> bool {
        self.offers.read().await.is_empty()
    }
}

fn parse_offers(path: &Path, contents: &str) -> Result<Vec<Offer>, DomainError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let parsed = if is_yaml {
        serde_yaml::from_str::<Vec<Offer>>(contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Vec<Offer>>(contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| {
        DomainError::new(
            ErrorCode::CatalogError,
            format!("Invalid catalog file: {}", reason),
        )
        .with_detail("path", path.display().to_string())
    })
}

#[async_trait]
impl OfferCatalog for InMemoryOfferCatalog {
    async fn find(&self, id: &OfferId) -> Result<Option<Offer>, DomainError> {
        Ok(self.offers.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Offer>, DomainError> {
        let offers = self.offers.read().await;
        let mut entries: Vec<(&OfferId, &Offer)> = offers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Ok(entries.into_iter().map(|(_, offer)| offer.clone()).collect())
    }

    async fn save(&self, id: OfferId, mut offer: Offer) -> Result<Offer, DomainError> {
        offer.id = Some(id.clone());
        self.offers.write().await.insert(id, offer.clone());
        Ok(offer)
    }
}
