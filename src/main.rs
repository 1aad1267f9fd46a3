//! Offer Pricing service entry point.

use std::sync::Arc;

use offer_pricing::adapters::http::{app_router, PricingAppState};
use offer_pricing::adapters::InMemoryOfferCatalog;
use offer_pricing::config::AppConfig;
use offer_pricing::telemetry::{init_tracing, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;

    let format = if config.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(&config.server.log_level, format);

    let catalog = match &config.catalog.path {
        Some(path) => InMemoryOfferCatalog::load_from_file(path).await?,
        None => {
            tracing::warn!("No catalog path configured, starting with an empty catalog");
            InMemoryOfferCatalog::new()
        }
    };

    let state = PricingAppState::new(Arc::new(catalog));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Offer pricing service listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
