//! Per-user movie reviews. One review per user per movie.

pub mod entity;
pub mod handlers;
pub mod models;
mod postgres;
pub mod repository;
pub mod service;

pub use models::{Review, ReviewRequest, ReviewResponse};
pub use repository::ReviewRepository;
pub use service::ReviewService;
