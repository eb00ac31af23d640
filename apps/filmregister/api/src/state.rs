//! Shared application state.

use axum_helpers::JwtAuth;

/// Cloned into the readiness router; route handlers get their services instead.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Token issuer/verifier shared by the auth service and the route guard
    pub jwt: JwtAuth,
}
