use async_trait::async_trait;
use uuid::Uuid;

use super::models::{Movie, MovieFilter};
use crate::error::{CatalogError, CatalogResult};
use crate::repository::InMemoryCatalogRepository;

/// Catalog store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: Movie) -> CatalogResult<Movie>;

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Movie>>;

    /// Movies with the given ids. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> CatalogResult<Vec<Movie>>;

    /// Movies matching the filter's type/genre/director/year, oldest first.
    /// The sort key is not applied here.
    async fn list(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>>;

    /// Case-insensitive substring search over title, description, director and genre.
    async fn search(&self, keyword: &str) -> CatalogResult<Vec<Movie>>;

    /// Replace a stored movie.
    async fn update(&self, movie: Movie) -> CatalogResult<Movie>;

    /// Delete a movie with its reviews and watchlist entries.
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    async fn count(&self) -> CatalogResult<u64>;
}

fn oldest_first(mut movies: Vec<Movie>) -> Vec<Movie> {
    movies.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    movies
}

#[async_trait]
impl MovieRepository for InMemoryCatalogRepository {
    async fn create(&self, movie: Movie) -> CatalogResult<Movie> {
        let mut state = self.state.write().await;
        state.movies.insert(movie.id, movie.clone());

        tracing::info!(movie_id = %movie.id, title = %movie.title, "Created movie");
        Ok(movie)
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Movie>> {
        Ok(self.state.read().await.movies.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CatalogResult<Vec<Movie>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.movies.get(id).cloned())
            .collect())
    }

    async fn list(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let state = self.state.read().await;
        let movies = state
            .movies
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        Ok(oldest_first(movies))
    }

    async fn search(&self, keyword: &str) -> CatalogResult<Vec<Movie>> {
        let needle = keyword.to_lowercase();
        let state = self.state.read().await;
        let movies = state
            .movies
            .values()
            .filter(|m| m.matches_keyword(&needle))
            .cloned()
            .collect();
        Ok(oldest_first(movies))
    }

    async fn update(&self, movie: Movie) -> CatalogResult<Movie> {
        let mut state = self.state.write().await;
        let stored = state
            .movies
            .get_mut(&movie.id)
            .ok_or(CatalogError::MovieNotFound(movie.id))?;
        *stored = movie.clone();

        tracing::info!(movie_id = %movie.id, "Updated movie");
        Ok(movie)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        if state.movies.remove(&id).is_none() {
            return Ok(false);
        }

        state.reviews.retain(|_, r| r.movie_id != id);
        state.watchlist.retain(|_, w| w.movie_id != id);

        tracing::info!(movie_id = %id, "Deleted movie");
        Ok(true)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.state.read().await.movies.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{MovieRequest, MovieType};

    fn movie(title: &str, director: &str, movie_type: MovieType) -> Movie {
        Movie::new(
            MovieRequest {
                title: title.into(),
                director: Some(director.into()),
                genre: Some("Drama".into()),
                movie_type: Some(movie_type),
                ..Default::default()
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_list_filters_by_type_and_director() {
        let repo = InMemoryCatalogRepository::new();
        repo.create(movie("Inception", "Christopher Nolan", MovieType::Movie)).await.unwrap();
        repo.create(movie("Heat", "Michael Mann", MovieType::Movie)).await.unwrap();
        repo.create(movie("The Crown", "Peter Morgan", MovieType::TvSeries)).await.unwrap();

        let series = repo
            .list(&MovieFilter {
                movie_type: Some(MovieType::TvSeries),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].title, "The Crown");

        let nolan = repo
            .list(&MovieFilter {
                director: Some("christopher nolan".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(nolan.len(), 1);
        assert_eq!(nolan[0].title, "Inception");

        assert_eq!(repo.list(&MovieFilter::default()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = InMemoryCatalogRepository::new();
        repo.create(movie("Inception", "Christopher Nolan", MovieType::Movie)).await.unwrap();
        repo.create(movie("Heat", "Michael Mann", MovieType::Movie)).await.unwrap();

        let found = repo.search("NOLAN").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Inception");
    }

    #[tokio::test]
    async fn test_update_missing_movie_is_not_found() {
        let repo = InMemoryCatalogRepository::new();
        let result = repo.update(movie("Ghost", "Nobody", MovieType::Movie)).await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_cascades_to_reviews_and_watchlist() {
        use crate::reviews::{Review, ReviewRepository};
        use crate::watchlist::{WatchlistEntry, WatchlistRepository};

        let repo = InMemoryCatalogRepository::new();
        let kept = MovieRepository::create(&repo, movie("Heat", "Michael Mann", MovieType::Movie))
            .await
            .unwrap();
        let gone = MovieRepository::create(
            &repo,
            movie("Inception", "Christopher Nolan", MovieType::Movie),
        )
        .await
        .unwrap();
        let user_id = Uuid::now_v7();

        ReviewRepository::create(&repo, Review::new(user_id, gone.id, 9, None)).await.unwrap();
        ReviewRepository::create(&repo, Review::new(user_id, kept.id, 7, None)).await.unwrap();
        repo.add(WatchlistEntry::new(user_id, gone.id)).await.unwrap();

        assert!(MovieRepository::delete(&repo, gone.id).await.unwrap());
        assert!(!MovieRepository::delete(&repo, gone.id).await.unwrap());

        assert!(repo.list_by_movie(gone.id).await.unwrap().is_empty());
        assert_eq!(repo.list_by_movie(kept.id).await.unwrap().len(), 1);
        assert!(repo.list_for_user(user_id).await.unwrap().is_empty());
    }
}
