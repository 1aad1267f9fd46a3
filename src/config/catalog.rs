//! Offer catalog configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the service reads its offers from.
///
/// Without a path the service starts with an empty catalog and offers
/// are provisioned through `PUT /api/offers/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON or YAML seed file holding an array of offers
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.trim().is_empty() => {
                Err(ValidationError::MissingRequired("catalog.path"))
            }
            Some(path) if !Path::new(path).is_file() => {
                Err(ValidationError::CatalogNotFound(path.clone()))
            }
            _ => Ok(()),
        }
    }
}
