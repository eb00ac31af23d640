//! Movie and TV series catalog.

pub mod entity;
pub mod handlers;
pub mod models;
mod postgres;
pub mod repository;
pub mod service;

pub use models::{Movie, MovieFilter, MovieRequest, MovieResponse, MovieSort, MovieType};
pub use repository::MovieRepository;
pub use service::MovieService;
