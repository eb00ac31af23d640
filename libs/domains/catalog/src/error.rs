use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_users::UserError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Movie not found with id: {0}")]
    MovieNotFound(Uuid),

    #[error("Review not found with id: {0}")]
    ReviewNotFound(Uuid),

    #[error("User not found")]
    UserNotFound,

    #[error("You have already reviewed this movie")]
    DuplicateReview,

    #[error("You can only edit your own reviews")]
    ReviewEditForbidden,

    #[error("You can only delete your own reviews")]
    ReviewDeleteForbidden,

    #[error("Movie already in your watchlist")]
    AlreadyInWatchlist,

    #[error("Movie not found in your watchlist")]
    NotInWatchlist,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        CatalogError::Internal(format!("Database error: {}", err))
    }
}

impl From<UserError> for CatalogError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => CatalogError::UserNotFound,
            other => CatalogError::Internal(other.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound(_)
            | CatalogError::ReviewNotFound(_)
            | CatalogError::UserNotFound
            | CatalogError::NotInWatchlist => AppError::NotFound(err.to_string()),
            CatalogError::DuplicateReview | CatalogError::AlreadyInWatchlist => {
                AppError::Conflict(err.to_string())
            }
            CatalogError::ReviewEditForbidden | CatalogError::ReviewDeleteForbidden => {
                AppError::Forbidden(err.to_string())
            }
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let id = Uuid::now_v7();
        assert_eq!(AppError::from(CatalogError::MovieNotFound(id)).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::from(CatalogError::NotInWatchlist).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::from(CatalogError::DuplicateReview).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::from(CatalogError::ReviewDeleteForbidden).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(CatalogError::Internal("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let id = Uuid::nil();
        assert_eq!(
            CatalogError::MovieNotFound(id).to_string(),
            "Movie not found with id: 00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            CatalogError::ReviewEditForbidden.to_string(),
            "You can only edit your own reviews"
        );
    }

    #[test]
    fn test_missing_user_maps_to_user_not_found() {
        assert!(matches!(
            CatalogError::from(UserError::NotFound),
            CatalogError::UserNotFound
        ));
    }
}
