//! HTTP handlers for offer pricing endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::application::handlers::offer::{
    GetOfferHandler, GetOfferQuery, ListOffersHandler, ListOffersQuery, QuoteOfferHandler,
    QuoteOfferQuery, SaveOfferCommand, SaveOfferHandler, VerifyPurchaseCommand,
    VerifyPurchaseHandler,
};
use crate::domain::foundation::{DomainError, OfferId};
use crate::domain::offer::{BillingPeriod, Offer, OfferError, PricingCalculator, PurchaseRequest};
use crate::ports::OfferCatalog;

use super::dto::{ErrorResponse, InlineQuoteRequest, PeriodsResponse, QuoteRequest};
use super::extract::{ApiJson, ApiQuery};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct PricingAppState {
    pub catalog: Arc<dyn OfferCatalog>,
}

impl PricingAppState {
    pub fn new(catalog: Arc<dyn OfferCatalog>) -> Self {
        Self { catalog }
    }

    pub fn get_offer_handler(&self) -> GetOfferHandler {
        GetOfferHandler::new(self.catalog.clone())
    }

    pub fn list_offers_handler(&self) -> ListOffersHandler {
        ListOffersHandler::new(self.catalog.clone())
    }

    pub fn save_offer_handler(&self) -> SaveOfferHandler {
        SaveOfferHandler::new(self.catalog.clone())
    }

    pub fn quote_offer_handler(&self) -> QuoteOfferHandler {
        QuoteOfferHandler::new(self.catalog.clone())
    }

    pub fn verify_purchase_handler(&self) -> VerifyPurchaseHandler {
        VerifyPurchaseHandler::new(self.catalog.clone())
    }
}

/// Query string of the offer listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOffersParams {
    #[serde(default)]
    pub paid_only: bool,
}

fn parse_offer_id(raw: String) -> Result<OfferId, OfferApiError> {
    OfferId::new(raw).map_err(|e| OfferApiError(OfferError::from(e)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/offers - List offer summaries
pub async fn list_offers(
    State(state): State<PricingAppState>,
    ApiQuery(params): ApiQuery<ListOffersParams>,
) -> Result<impl IntoResponse, OfferApiError> {
    let handler = state.list_offers_handler();
    let result = handler
        .handle(ListOffersQuery {
            paid_only: params.paid_only,
        })
        .await?;
    Ok(Json(result))
}

/// GET /api/offers/:id - Get one offer summary
pub async fn get_offer(
    State(state): State<PricingAppState>,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, OfferApiError> {
    let handler = state.get_offer_handler();
    let query = GetOfferQuery {
        offer_id: parse_offer_id(offer_id)?,
    };
    Ok(Json(handler.handle(query).await?))
}

/// GET /api/offers/:id/periods - Purchasable periods of an offer
pub async fn get_offer_periods(
    State(state): State<PricingAppState>,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, OfferApiError> {
    let handler = state.get_offer_handler();
    let query = GetOfferQuery {
        offer_id: parse_offer_id(offer_id)?,
    };
    let summary = handler.handle(query).await?;

    Ok(Json(PeriodsResponse {
        periods: summary.periods,
        default_period: summary.default_period,
        is_free: summary.is_free,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (PUT/POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/offers/:id - Create or replace an offer
pub async fn save_offer(
    State(state): State<PricingAppState>,
    Path(offer_id): Path<String>,
    ApiJson(offer): ApiJson<Offer>,
) -> Result<impl IntoResponse, OfferApiError> {
    let handler = state.save_offer_handler();
    let cmd = SaveOfferCommand {
        offer_id: parse_offer_id(offer_id)?,
        offer,
    };
    Ok(Json(handler.handle(cmd).await?))
}

/// POST /api/offers/:id/quote - Price a selection of a catalog offer
pub async fn quote_offer(
    State(state): State<PricingAppState>,
    Path(offer_id): Path<String>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> Result<impl IntoResponse, OfferApiError> {
    let handler = state.quote_offer_handler();
    let query = QuoteOfferQuery {
        offer_id: parse_offer_id(offer_id)?,
        selection: request.into(),
    };
    Ok(Json(handler.handle(query).await?))
}

/// POST /api/offers/:id/verify - Recompute and check a submitted total
pub async fn verify_purchase(
    State(state): State<PricingAppState>,
    Path(offer_id): Path<String>,
    ApiJson(request): ApiJson<PurchaseRequest>,
) -> Result<impl IntoResponse, OfferApiError> {
    let offer_id = parse_offer_id(offer_id)?;
    if offer_id != request.offer_id {
        return Err(OfferError::validation("offerId", "Does not match the offer in the path").into());
    }

    let handler = state.verify_purchase_handler();
    let verification = handler.handle(VerifyPurchaseCommand { request }).await?;
    Ok(Json(verification))
}

/// POST /api/pricing/quote - Price an inline offer for display
///
/// Mirrors what offer cards show: no catalog lookup, no selection checks.
/// A missing period selects the offer's default; an unknown code prices as
/// monthly.
pub async fn quote_inline(ApiJson(request): ApiJson<InlineQuoteRequest>) -> impl IntoResponse {
    let period = match request.period.as_deref() {
        Some(code) => BillingPeriod::from_code(code).unwrap_or(BillingPeriod::Monthly),
        None => PricingCalculator::default_period(&request.offer).unwrap_or(BillingPeriod::Monthly),
    };

    Json(PricingCalculator::quote(
        &request.offer,
        period,
        request.subject_count,
    ))
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct OfferApiError(OfferError);

impl From<OfferError> for OfferApiError {
    fn from(err: OfferError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for OfferApiError {
    fn from(err: DomainError) -> Self {
        Self(OfferError::from(err))
    }
}

impl IntoResponse for OfferApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            OfferError::NotFound(_) => StatusCode::NOT_FOUND,
            OfferError::PeriodUnavailable { .. }
            | OfferError::SubjectCountOutOfRange { .. }
            | OfferError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            OfferError::PriceMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            OfferError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "Offer request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
