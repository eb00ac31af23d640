use axum::Router;
use axum_helpers::JwtAuth;
use domain_users::{AuthService, UserRepository, handlers};

pub fn router<U: UserRepository + 'static>(users: U, jwt: JwtAuth) -> Router {
    handlers::router(AuthService::new(users, jwt))
}
