//! Request extractors that reject with the API's JSON error body.
//!
//! Axum's own `Json` and `Query` answer malformed input with a plain-text
//! 400/415/422. These wrappers turn every such rejection into a 400
//! `VALIDATION_FAILED`, leaving 422 to `PRICE_MISMATCH` alone.

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::handlers::OfferApiError;
use crate::domain::offer::OfferError;

/// JSON body extractor for the pricing API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = OfferApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejected(rejection)),
        }
    }
}

/// Query string extractor for the pricing API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = OfferApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejected(rejection)),
        }
    }
}

fn json_rejected(rejection: JsonRejection) -> OfferApiError {
    tracing::debug!(status = %rejection.status(), "Rejected request body");
    OfferError::validation("body", rejection.body_text()).into()
}

fn query_rejected(rejection: QueryRejection) -> OfferApiError {
    tracing::debug!(status = %rejection.status(), "Rejected query string");
    OfferError::validation("query", rejection.body_text()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: u32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_code(err: OfferApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(json_request(r#"{"count": 3}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.count, 3);
    }

    #[tokio::test]
    async fn wrong_type_is_bad_request_with_json_body() {
        let err = ApiJson::<Payload>::from_request(json_request(r#"{"count": "x"}"#), &())
            .await
            .unwrap_err();
        let (status, body) = error_code(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"count": 3}"#))
            .unwrap();
        let err = ApiJson::<Payload>::from_request(request, &()).await.unwrap_err();
        let (status, _) = error_code(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bad_query_is_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/?count=lots")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let err = ApiQuery::<Payload>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        let (status, body) = error_code(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}
