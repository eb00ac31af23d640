//! Query string extractor with JSON error bodies.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Like [`Query`], but a malformed query string is rejected with a 400
/// `QUERY_EXTRACTION` body instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn list_movies(JsonQuery(filter): JsonQuery<MovieFilter>) { /* ... */ }
/// ```
pub struct JsonQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonQuery(value))
    }
}

/// Reads an empty query parameter (`?type=`) as absent.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Paging {
        page: u32,
        #[serde(default, deserialize_with = "empty_as_none")]
        size: Option<u32>,
    }

    async fn echo(JsonQuery(paging): JsonQuery<Paging>) -> String {
        format!("{}:{:?}", paging.page, paging.size)
    }

    async fn send(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/items", get(echo));
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_query_is_extracted() {
        let (status, body) = send("/items?page=2&size=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"2:Some(10)");
    }

    #[tokio::test]
    async fn test_empty_parameter_reads_as_none() {
        let (status, body) = send("/items?page=1&size=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"1:None");
    }

    #[tokio::test]
    async fn test_malformed_query_returns_json_envelope() {
        let (status, body) = send("/items?page=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "QUERY_EXTRACTION");
        assert_eq!(error.code, 1010);
    }

    #[tokio::test]
    async fn test_missing_required_parameter_returns_json_envelope() {
        let (status, body) = send("/items").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "QUERY_EXTRACTION");
    }
}
