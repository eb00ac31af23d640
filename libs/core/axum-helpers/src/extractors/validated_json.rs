//! JSON extractor with `validator` checks.

use crate::errors::{AppError, ErrorCode, ErrorResponse, validation_details};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `Validate::validate`.
///
/// Deserialization failures go through [`AppError`]; validation failures
/// return 400 with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct ReviewRequest {
///     #[validate(range(min = 1, max = 10))]
///     rating: i32,
/// }
///
/// async fn add_review(ValidatedJson(payload): ValidatedJson<ReviewRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate().map_err(|e| {
            let body = ErrorResponse::new(
                ErrorCode::ValidationError,
                ErrorCode::ValidationError.default_message(),
            )
            .with_details(validation_details(&e));

            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

/// Reads an explicit JSON `null` as the field's default, so a required
/// field sent as `null` fails validation like a missing one.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Rating {
        #[serde(default, deserialize_with = "null_as_default")]
        #[validate(range(min = 1, max = 10))]
        rating: i32,
    }

    async fn rate(ValidatedJson(body): ValidatedJson<Rating>) -> String {
        body.rating.to_string()
    }

    /// Status plus the envelope's `error` field, if the body is an error envelope.
    async fn send(body: &'static str) -> (StatusCode, Option<String>) {
        let app = Router::new().route("/ratings", post(rate));
        let response = app
            .oneshot(
                axum::http::Request::post("/ratings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error = serde_json::from_slice::<ErrorResponse>(&bytes)
            .ok()
            .map(|e| e.error);
        (status, error)
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let (status, error) = send(r#"{"rating":7}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(error, None);
    }

    #[tokio::test]
    async fn test_null_field_fails_validation() {
        let (status, error) = send(r#"{"rating":null}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_out_of_range_fails_validation() {
        let (status, error) = send(r#"{"rating":11}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let (status, error) = send(r#"{"rating":"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.as_deref(), Some("JSON_EXTRACTION"));
    }
}
