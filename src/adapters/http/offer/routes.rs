//! Axum router configuration for offer pricing endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_offer, get_offer_periods, list_offers, quote_inline, quote_offer, save_offer,
    verify_purchase, PricingAppState,
};

/// Create the offer catalog router.
///
/// # Routes
///
/// - `GET /` - List offers (`?paidOnly=true` hides free offers)
/// - `GET /:id` - Offer summary
/// - `PUT /:id` - Create or replace an offer
/// - `GET /:id/periods` - Purchasable periods
/// - `POST /:id/quote` - Price a selection
/// - `POST /:id/verify` - Verify a submitted purchase total
pub fn offer_routes() -> Router<PricingAppState> {
    Router::new()
        .route("/", get(list_offers))
        .route("/:id", get(get_offer).put(save_offer))
        .route("/:id/periods", get(get_offer_periods))
        .route("/:id/quote", post(quote_offer))
        .route("/:id/verify", post(verify_purchase))
}

/// Create the stateless pricing router.
///
/// # Routes
/// - `POST /quote` - Price an inline offer
pub fn pricing_routes() -> Router<PricingAppState> {
    Router::new().route("/quote", post(quote_inline))
}

/// Create the complete pricing module router, suitable for mounting at `/api`.
pub fn pricing_router() -> Router<PricingAppState> {
    Router::new()
        .nest("/offers", offer_routes())
        .nest("/pricing", pricing_routes())
}
