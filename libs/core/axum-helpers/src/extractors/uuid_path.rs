//! UUID path parameter extractor.

use crate::errors::{ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extracts a single UUID path parameter.
///
/// Malformed ids are rejected with a 400 `INVALID_UUID` body instead of
/// axum's plain-text rejection.
///
/// ```ignore
/// async fn get_movie(UuidPath(id): UuidPath) -> String {
///     format!("Movie ID: {}", id)
/// }
///
/// let app = Router::new().route("/movies/{id}", get(get_movie));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Uuid::parse_str(&raw).map(UuidPath).map_err(|_| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid UUID: {}", raw),
                ErrorCode::InvalidUuid,
            )
        })
    }
}
