use axum::Router;
use axum_helpers::JwtAuth;
use domain_catalog::{MovieRepository, ReviewRepository, ReviewService, reviews::handlers};
use domain_users::UserRepository;

pub fn router<C, U>(catalog: &C, users: U, jwt: JwtAuth) -> Router
where
    C: MovieRepository + ReviewRepository + Clone + 'static,
    U: UserRepository + 'static,
{
    let service = ReviewService::new(catalog.clone(), catalog.clone(), users);
    handlers::router(service, jwt)
}
