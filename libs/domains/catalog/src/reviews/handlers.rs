use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JwtAuth, JwtClaims, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    jwt_auth_middleware,
};
use domain_users::UserRepository;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{ReviewRequest, ReviewResponse};
use super::repository::ReviewRepository;
use super::service::ReviewService;
use crate::MessageResponse;
use crate::error::{CatalogError, CatalogResult};
use crate::movies::MovieRepository;

pub const TAG: &str = "Reviews";

/// OpenAPI documentation for the review endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_movie_reviews, add_review, update_review, delete_review, list_my_reviews),
    components(
        schemas(ReviewRequest, ReviewResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Movie reviews")
    )
)]
pub struct ApiDoc;

type SharedService<V, M, U> = State<Arc<ReviewService<V, M, U>>>;

/// Review routes. Listing a movie's reviews is public; the rest needs a token.
pub fn router<V, M, U>(service: ReviewService<V, M, U>, jwt: JwtAuth) -> Router
where
    V: ReviewRepository + 'static,
    M: MovieRepository + 'static,
    U: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    let public = Router::new().route("/movies/{id}/reviews", get(list_movie_reviews));

    let protected = Router::new()
        .route("/movies/{id}/reviews", post(add_review))
        .route("/reviews/{id}", put(update_review).delete(delete_review))
        .route("/users/me/reviews", get(list_my_reviews))
        .route_layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware));

    public.merge(protected).with_state(shared_service)
}

fn audit_denied(
    err: &CatalogError,
    claims: &JwtClaims,
    action: &str,
    id: uuid::Uuid,
    headers: &HeaderMap,
) {
    if matches!(
        err,
        CatalogError::ReviewEditForbidden | CatalogError::ReviewDeleteForbidden
    ) {
        AuditEvent::new(
            Some(claims.username().to_string()),
            action,
            Some(format!("review:{}", id)),
            AuditOutcome::Denied,
        )
        .with_request(headers)
        .with_details(json!({ "reason": "not_owner" }))
        .log();
    }
}

/// Reviews of a movie
#[utoipa::path(
    get,
    path = "/movies/{id}/reviews",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Reviews of the movie", body = Vec<ReviewResponse>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_movie_reviews<V: ReviewRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<V, M, U>,
    UuidPath(movie_id): UuidPath,
) -> CatalogResult<Json<Vec<ReviewResponse>>> {
    let reviews = service.list_for_movie(movie_id).await?;
    Ok(Json(reviews))
}

/// Review a movie
#[utoipa::path(
    post,
    path = "/movies/{id}/reviews",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_review<V: ReviewRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<V, M, U>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(movie_id): UuidPath,
    ValidatedJson(input): ValidatedJson<ReviewRequest>,
) -> CatalogResult<impl IntoResponse> {
    let review = service
        .add_review(movie_id, input, claims.username())
        .await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "review.create",
        Some(format!("review:{}", review.id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .with_details(json!({ "movie_id": movie_id, "rating": review.rating }))
    .log();

    Ok((StatusCode::CREATED, Json(review)))
}

/// Edit your review
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ReviewResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_review<V: ReviewRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<V, M, U>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ReviewRequest>,
) -> CatalogResult<Json<ReviewResponse>> {
    let review = service
        .update_review(id, input, claims.username())
        .await
        .inspect_err(|e| audit_denied(e, &claims, "review.update", id, &headers))?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "review.update",
        Some(format!("review:{}", id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok(Json(review))
}

/// Delete your review
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_review<V: ReviewRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<V, M, U>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<MessageResponse>> {
    service
        .delete_review(id, claims.username())
        .await
        .inspect_err(|e| audit_denied(e, &claims, "review.delete", id, &headers))?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "review.delete",
        Some(format!("review:{}", id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok(Json(MessageResponse::new("Review deleted successfully")))
}

/// Reviews written by the caller
#[utoipa::path(
    get,
    path = "/users/me/reviews",
    tag = TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's reviews", body = Vec<ReviewResponse>),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_my_reviews<V: ReviewRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<V, M, U>,
    claims: JwtClaims,
) -> CatalogResult<Json<Vec<ReviewResponse>>> {
    let reviews = service.list_for_user(claims.username()).await?;
    Ok(Json(reviews))
}
