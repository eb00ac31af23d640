//! Per-user saved movies.

pub mod entity;
pub mod handlers;
pub mod models;
mod postgres;
pub mod repository;
pub mod service;

pub use models::{WatchlistEntry, WatchlistResponse};
pub use repository::WatchlistRepository;
pub use service::WatchlistService;
