use async_trait::async_trait;
use uuid::Uuid;

use super::models::WatchlistEntry;
use crate::error::{CatalogError, CatalogResult};
use crate::repository::InMemoryCatalogRepository;

/// Watchlist store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Insert an entry. A duplicate `(user, movie)` pair is rejected atomically
    /// with [`CatalogError::AlreadyInWatchlist`].
    async fn add(&self, entry: WatchlistEntry) -> CatalogResult<WatchlistEntry>;

    async fn find_entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<WatchlistEntry>>;

    /// Entries of one user, oldest first.
    async fn list_for_user(&self, user_id: Uuid) -> CatalogResult<Vec<WatchlistEntry>>;

    /// Returns false when the pair was not present.
    async fn remove(&self, user_id: Uuid, movie_id: Uuid) -> CatalogResult<bool>;

    async fn count(&self) -> CatalogResult<u64>;
}

#[async_trait]
impl WatchlistRepository for InMemoryCatalogRepository {
    async fn add(&self, entry: WatchlistEntry) -> CatalogResult<WatchlistEntry> {
        let mut state = self.state.write().await;

        let duplicate = state
            .watchlist
            .values()
            .any(|w| w.user_id == entry.user_id && w.movie_id == entry.movie_id);
        if duplicate {
            return Err(CatalogError::AlreadyInWatchlist);
        }

        state.watchlist.insert(entry.id, entry.clone());

        tracing::info!(user_id = %entry.user_id, movie_id = %entry.movie_id, "Added to watchlist");
        Ok(entry)
    }

    async fn find_entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<WatchlistEntry>> {
        let state = self.state.read().await;
        Ok(state
            .watchlist
            .values()
            .find(|w| w.user_id == user_id && w.movie_id == movie_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> CatalogResult<Vec<WatchlistEntry>> {
        let state = self.state.read().await;
        let mut entries: Vec<WatchlistEntry> = state
            .watchlist
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.added_at.cmp(&b.added_at).then(a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn remove(&self, user_id: Uuid, movie_id: Uuid) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        let before = state.watchlist.len();
        state
            .watchlist
            .retain(|_, w| !(w.user_id == user_id && w.movie_id == movie_id));

        let removed = state.watchlist.len() < before;
        if removed {
            tracing::info!(user_id = %user_id, movie_id = %movie_id, "Removed from watchlist");
        }
        Ok(removed)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.state.read().await.watchlist.len() as u64)
    }
}
