//! HTTP adapter for offer pricing endpoints.
//!
//! Exposes the offer domain via REST API:
//! - `GET /api/offers` - List offers
//! - `GET /api/offers/:id` - Get an offer with its periods
//! - `PUT /api/offers/:id` - Create or replace an offer
//! - `GET /api/offers/:id/periods` - Purchasable periods
//! - `POST /api/offers/:id/quote` - Price a selection
//! - `POST /api/offers/:id/verify` - Verify a submitted purchase total
//! - `POST /api/pricing/quote` - Price an inline offer for display

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use extract::{ApiJson, ApiQuery};
pub use handlers::{OfferApiError, PricingAppState};
pub use routes::{offer_routes, pricing_router, pricing_routes};
