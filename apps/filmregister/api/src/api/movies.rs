use axum::Router;
use axum_helpers::JwtAuth;
use domain_catalog::{MovieRepository, MovieService, ReviewRepository, movies::handlers};

pub fn router<C>(catalog: &C, jwt: JwtAuth) -> Router
where
    C: MovieRepository + ReviewRepository + Clone + 'static,
{
    let service = MovieService::new(catalog.clone(), catalog.clone());
    handlers::router(service, jwt)
}
