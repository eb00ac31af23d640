use axum::Router;
use axum_helpers::JwtAuth;
use domain_catalog::{MovieRepository, PgCatalogRepository, ReviewRepository, WatchlistRepository};
use domain_users::{PgUserRepository, UserRepository};

use crate::state::AppState;

pub mod auth;
pub mod health;
pub mod movies;
pub mod reviews;
pub mod watchlist;

/// API routes over PostgreSQL, without the `/api` prefix.
pub fn routes(state: &AppState) -> Router {
    compose(
        PgCatalogRepository::new(state.db.clone()),
        PgUserRepository::new(state.db.clone()),
        state.jwt.clone(),
    )
}

/// Wire every domain router over the given stores.
///
/// `create_router` adds the `/api` prefix. Catalog routers carry full paths
/// (`/movies/{id}/reviews`, `/watchlist/...`), so they are merged, not nested.
pub fn compose<C, U>(catalog: C, users: U, jwt: JwtAuth) -> Router
where
    C: MovieRepository + ReviewRepository + WatchlistRepository + Clone + 'static,
    U: UserRepository + Clone + 'static,
{
    Router::new()
        .nest("/auth", auth::router(users.clone(), jwt.clone()))
        .merge(movies::router(&catalog, jwt.clone()))
        .merge(reviews::router(&catalog, users.clone(), jwt.clone()))
        .merge(watchlist::router(&catalog, users, jwt))
}

/// `/ready` with a real database check. Merged beside the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
