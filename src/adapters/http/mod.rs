//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`app_router`] assembles them with the cross-cutting layers.

pub mod offer;

use axum::routing::get;
use axum::Router;
use http::Method;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsPolicy, ServerConfig};

// Re-export key types for convenience
pub use offer::pricing_router;
pub use offer::PricingAppState;

/// Build the complete application router.
///
/// Mounts the pricing API under `/api` and a `/health` probe. Every request
/// gets an `x-request-id` (kept if the caller sent one), is traced, times out
/// after `request_timeout_secs`, and may be gzip-compressed.
///
/// An unparsable CORS origin list denies every cross-origin caller; run
/// `ServerConfig::validate` first to fail at startup instead.
pub fn app_router(state: PricingAppState, server: &ServerConfig) -> Router {
    let cors = match server.cors_policy() {
        Ok(policy) => cors_layer(policy),
        Err(err) => {
            tracing::error!(error = %err, "Invalid CORS configuration, denying cross-origin requests");
            cors_layer(CorsPolicy::Origins(Vec::new()))
        }
    };

    Router::new()
        .route("/health", get(offer::handlers::health))
        .nest("/api", pricing_router())
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(policy: CorsPolicy) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    match policy {
        CorsPolicy::AnyOrigin => layer.allow_origin(Any),
        CorsPolicy::Origins(origins) => layer.allow_origin(AllowOrigin::list(origins)),
    }
}
