use axum::Router;
use axum_helpers::JwtAuth;
use domain_catalog::{MovieRepository, WatchlistRepository, WatchlistService, watchlist::handlers};
use domain_users::UserRepository;

pub fn router<C, U>(catalog: &C, users: U, jwt: JwtAuth) -> Router
where
    C: MovieRepository + WatchlistRepository + Clone + 'static,
    U: UserRepository + 'static,
{
    let service = WatchlistService::new(catalog.clone(), catalog.clone(), users);
    handlers::router(service, jwt)
}
