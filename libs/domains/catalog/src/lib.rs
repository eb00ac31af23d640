//! Catalog Domain
//!
//! Movies and TV series, user reviews and per-user watchlists.
//!
//! Each area is laid out the same way:
//!
//! ```text
//! movies/ reviews/ watchlist/
//!   models.rs      ← domain types and request/response DTOs
//!   entity.rs      ← sea-orm entity
//!   repository.rs  ← store trait + in-memory impl
//!   postgres.rs    ← PostgreSQL impl
//!   service.rs     ← business rules
//!   handlers.rs    ← axum router + OpenAPI docs
//! ```
//!
//! [`InMemoryCatalogRepository`] and [`PgCatalogRepository`] implement all three
//! store traits over one backing store, so deleting a movie removes its reviews
//! and watchlist entries.
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_catalog::{InMemoryCatalogRepository, MovieService, movies};
//!
//! let jwt = JwtAuth::new(&JwtConfig::new("a-secret-that-is-at-least-32-characters").unwrap());
//! let store = InMemoryCatalogRepository::new();
//! let service = MovieService::new(store.clone(), store);
//! let router = movies::handlers::router(service, jwt);
//! ```

pub mod error;
pub mod movies;
pub mod postgres;
pub mod repository;
pub mod reviews;
pub mod watchlist;

pub use error::{CatalogError, CatalogResult};
pub use movies::{
    Movie, MovieFilter, MovieRepository, MovieRequest, MovieResponse, MovieService, MovieSort,
    MovieType,
};
pub use postgres::PgCatalogRepository;
pub use repository::InMemoryCatalogRepository;
pub use reviews::{Review, ReviewRepository, ReviewRequest, ReviewResponse, ReviewService};
pub use watchlist::{WatchlistEntry, WatchlistRepository, WatchlistResponse, WatchlistService};

/// Body returned by delete endpoints.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Movie deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
