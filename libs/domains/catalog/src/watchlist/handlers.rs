use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JwtAuth, JwtClaims, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
    jwt_auth_middleware,
};
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::WatchlistResponse;
use super::repository::WatchlistRepository;
use super::service::WatchlistService;
use crate::MessageResponse;
use crate::error::CatalogResult;
use crate::movies::MovieRepository;

pub const TAG: &str = "Watchlist";

#[derive(OpenApi)]
#[openapi(
    paths(add_to_watchlist, remove_from_watchlist, list_watchlist),
    components(
        schemas(WatchlistResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Movies saved for later")
    )
)]
pub struct ApiDoc;

type SharedService<W, M, U> = State<Arc<WatchlistService<W, M, U>>>;

/// Watchlist routes. All of them act on the caller's own list.
pub fn router<W, M, U>(service: WatchlistService<W, M, U>, jwt: JwtAuth) -> Router
where
    W: WatchlistRepository + 'static,
    M: MovieRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/watchlist", get(list_watchlist))
        .route(
            "/watchlist/movies/{id}",
            post(add_to_watchlist).delete(remove_from_watchlist),
        )
        .route_layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware))
        .with_state(Arc::new(service))
}

/// Add a movie to the caller's watchlist
#[utoipa::path(
    post,
    path = "/watchlist/movies/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 201, description = "Movie added", body = WatchlistResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_to_watchlist<W: WatchlistRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<W, M, U>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(movie_id): UuidPath,
) -> CatalogResult<impl IntoResponse> {
    let entry = service.add(movie_id, claims.username()).await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "watchlist.add",
        Some(format!("movie:{}", movie_id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remove a movie from the caller's watchlist
#[utoipa::path(
    delete,
    path = "/watchlist/movies/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie removed", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_from_watchlist<W: WatchlistRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<W, M, U>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(movie_id): UuidPath,
) -> CatalogResult<Json<MessageResponse>> {
    service.remove(movie_id, claims.username()).await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "watchlist.remove",
        Some(format!("movie:{}", movie_id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok(Json(MessageResponse::new("Movie removed from watchlist")))
}

/// The caller's watchlist
#[utoipa::path(
    get,
    path = "/watchlist",
    tag = TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Saved movies", body = Vec<WatchlistResponse>),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_watchlist<W: WatchlistRepository, M: MovieRepository, U: UserRepository>(
    State(service): SharedService<W, M, U>,
    claims: JwtClaims,
) -> CatalogResult<Json<Vec<WatchlistResponse>>> {
    let entries = service.list(claims.username()).await?;
    Ok(Json(entries))
}
