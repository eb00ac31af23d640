use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::movies::{Movie, MovieResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    pub fn new(user_id: Uuid, movie_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            movie_id,
            added_at: Utc::now(),
        }
    }
}

/// Watchlist entry with the movie embedded. The embedded movie carries no
/// review aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistResponse {
    pub id: Uuid,
    pub movie: MovieResponse,
    pub added_at: DateTime<Utc>,
}

impl WatchlistResponse {
    pub fn new(entry: WatchlistEntry, movie: Movie) -> Self {
        Self {
            id: entry.id,
            movie: movie.into(),
            added_at: entry.added_at,
        }
    }
}
