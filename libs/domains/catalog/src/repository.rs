use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::movies::Movie;
use crate::reviews::Review;
use crate::watchlist::WatchlistEntry;

#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) movies: HashMap<Uuid, Movie>,
    pub(crate) reviews: HashMap<Uuid, Review>,
    pub(crate) watchlist: HashMap<Uuid, WatchlistEntry>,
}

/// In-memory catalog (development/testing).
///
/// Implements [`MovieRepository`](crate::MovieRepository),
/// [`ReviewRepository`](crate::ReviewRepository) and
/// [`WatchlistRepository`](crate::WatchlistRepository) over one lock, so the
/// uniqueness checks and the movie delete cascade are atomic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogRepository {
    pub(crate) state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}
