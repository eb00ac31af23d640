use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JsonQuery, JwtAuth, JwtClaims, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    jwt_auth_middleware,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{MovieFilter, MovieRequest, MovieResponse, MovieType, SearchQuery};
use super::repository::MovieRepository;
use super::service::MovieService;
use crate::MessageResponse;
use crate::error::CatalogResult;
use crate::reviews::ReviewRepository;

pub const TAG: &str = "Movies";

/// OpenAPI documentation for the movie endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_movies, search_movies, get_movie, create_movie, update_movie, delete_movie),
    components(
        schemas(MovieRequest, MovieResponse, MovieType, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Movie and TV series catalog")
    )
)]
pub struct ApiDoc;

type SharedService<M, V> = State<Arc<MovieService<M, V>>>;

/// Movie routes. Reads are public; create, update and delete need a token.
pub fn router<M, V>(service: MovieService<M, V>, jwt: JwtAuth) -> Router
where
    M: MovieRepository + 'static,
    V: ReviewRepository + 'static,
{
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/search", get(search_movies))
        .route("/movies/{id}", get(get_movie));

    let protected = Router::new()
        .route("/movies", post(create_movie))
        .route("/movies/{id}", put(update_movie).delete(delete_movie))
        .route_layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware));

    public.merge(protected).with_state(shared_service)
}

/// List movies and series
#[utoipa::path(
    get,
    path = "/movies",
    tag = TAG,
    params(MovieFilter),
    responses(
        (status = 200, description = "Catalog entries with review aggregates", body = Vec<MovieResponse>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_movies<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    JsonQuery(filter): JsonQuery<MovieFilter>,
) -> CatalogResult<Json<Vec<MovieResponse>>> {
    let movies = service.list_movies(filter).await?;
    Ok(Json(movies))
}

/// Search by keyword
#[utoipa::path(
    get,
    path = "/movies/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching entries", body = Vec<MovieResponse>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_movies<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    JsonQuery(query): JsonQuery<SearchQuery>,
) -> CatalogResult<Json<Vec<MovieResponse>>> {
    let movies = service.search_movies(&query.keyword).await?;
    Ok(Json(movies))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_movie<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<MovieResponse>> {
    let movie = service.get_movie(id).await?;
    Ok(Json(movie))
}

/// Add a movie or series
#[utoipa::path(
    post,
    path = "/movies",
    tag = TAG,
    security(("bearerAuth" = [])),
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_movie<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    claims: JwtClaims,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<MovieRequest>,
) -> CatalogResult<impl IntoResponse> {
    let movie = service.create_movie(input, claims.username()).await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "movie.create",
        Some(format!("movie:{}", movie.id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .with_details(json!({
        "title": movie.title,
        "type": movie.movie_type.to_string(),
    }))
    .log();

    Ok((StatusCode::CREATED, Json(movie)))
}

/// Replace a movie's fields
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_movie<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<MovieRequest>,
) -> CatalogResult<Json<MovieResponse>> {
    let movie = service.update_movie(id, input).await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "movie.update",
        Some(format!("movie:{}", id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok(Json(movie))
}

/// Delete a movie with its reviews and watchlist entries
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = TAG,
    security(("bearerAuth" = [])),
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_movie<M: MovieRepository, V: ReviewRepository>(
    State(service): SharedService<M, V>,
    claims: JwtClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<MessageResponse>> {
    service.delete_movie(id).await?;

    AuditEvent::new(
        Some(claims.username().to_string()),
        "movie.delete",
        Some(format!("movie:{}", id)),
        AuditOutcome::Success,
    )
    .with_request(&headers)
    .log();

    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}
