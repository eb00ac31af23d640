use domain_users::{User, UserRepository};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::models::{WatchlistEntry, WatchlistResponse};
use super::repository::WatchlistRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::movies::{Movie, MovieRepository};

#[derive(Clone)]
pub struct WatchlistService<W: WatchlistRepository, M: MovieRepository, U: UserRepository> {
    entries: Arc<W>,
    movies: Arc<M>,
    users: Arc<U>,
}

impl<W, M, U> WatchlistService<W, M, U>
where
    W: WatchlistRepository,
    M: MovieRepository,
    U: UserRepository,
{
    pub fn new(entries: W, movies: M, users: U) -> Self {
        Self {
            entries: Arc::new(entries),
            movies: Arc::new(movies),
            users: Arc::new(users),
        }
    }

    pub async fn add(
        &self,
        movie_id: Uuid,
        acting_username: &str,
    ) -> CatalogResult<WatchlistResponse> {
        let user = self.find_user(acting_username).await?;
        let movie = self
            .movies
            .find_by_id(movie_id)
            .await?
            .ok_or(CatalogError::MovieNotFound(movie_id))?;

        if self.entries.find_entry(user.id, movie_id).await?.is_some() {
            return Err(CatalogError::AlreadyInWatchlist);
        }

        let entry = self.entries.add(WatchlistEntry::new(user.id, movie_id)).await?;
        Ok(WatchlistResponse::new(entry, movie))
    }

    pub async fn remove(&self, movie_id: Uuid, acting_username: &str) -> CatalogResult<()> {
        let user = self.find_user(acting_username).await?;

        if !self.entries.remove(user.id, movie_id).await? {
            return Err(CatalogError::NotInWatchlist);
        }
        Ok(())
    }

    pub async fn list(&self, acting_username: &str) -> CatalogResult<Vec<WatchlistResponse>> {
        let user = self.find_user(acting_username).await?;
        let entries = self.entries.list_for_user(user.id).await?;

        let movie_ids: Vec<Uuid> = entries.iter().map(|e| e.movie_id).collect();
        let mut movies: HashMap<Uuid, Movie> = self
            .movies
            .find_by_ids(&movie_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let movie = movies.remove(&entry.movie_id)?;
                Some(WatchlistResponse::new(entry, movie))
            })
            .collect())
    }

    async fn find_user(&self, username: &str) -> CatalogResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(CatalogError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryCatalogRepository;
    use crate::movies::MovieRequest;
    use crate::watchlist::repository::MockWatchlistRepository;
    use domain_users::{InMemoryUserRepository, Role};

    type InMemoryService =
        WatchlistService<InMemoryCatalogRepository, InMemoryCatalogRepository, InMemoryUserRepository>;

    async fn setup() -> (InMemoryService, Movie) {
        let users = InMemoryUserRepository::new();
        users
            .create(User::new("alice".into(), "alice@x.com".into(), "hash".into(), Role::User))
            .await
            .unwrap();

        let store = InMemoryCatalogRepository::new();
        let movie = MovieRepository::create(
            &store,
            Movie::new(
                MovieRequest {
                    title: "Arrival".into(),
                    ..Default::default()
                },
                None,
            ),
        )
        .await
        .unwrap();

        (WatchlistService::new(store.clone(), store, users), movie)
    }

    #[tokio::test]
    async fn test_add_twice_is_conflict_and_list_keeps_one() {
        let (service, movie) = setup().await;

        let added = service.add(movie.id, "alice").await.unwrap();
        assert_eq!(added.movie.title, "Arrival");
        assert_eq!(added.movie.average_rating, None);
        assert_eq!(added.movie.review_count, None);

        let second = service.add(movie.id, "alice").await;
        assert!(matches!(second, Err(CatalogError::AlreadyInWatchlist)));
        assert_eq!(service.list("alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_movie_is_not_found() {
        let (service, movie) = setup().await;

        let result = service.remove(movie.id, "alice").await;
        assert!(matches!(result, Err(CatalogError::NotInWatchlist)));

        service.add(movie.id, "alice").await.unwrap();
        service.remove(movie.id, "alice").await.unwrap();
        assert!(service.list("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_missing_movie_is_not_found() {
        let (service, _) = setup().await;

        let result = service.add(Uuid::now_v7(), "alice").await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (service, movie) = setup().await;

        assert!(matches!(
            service.add(movie.id, "ghost").await,
            Err(CatalogError::UserNotFound)
        ));
        assert!(matches!(
            service.list("ghost").await,
            Err(CatalogError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_store_conflict_is_surfaced() {
        let users = InMemoryUserRepository::new();
        users
            .create(User::new("alice".into(), "alice@x.com".into(), "hash".into(), Role::User))
            .await
            .unwrap();
        let store = InMemoryCatalogRepository::new();
        let movie = MovieRepository::create(
            &store,
            Movie::new(
                MovieRequest {
                    title: "Heat".into(),
                    ..Default::default()
                },
                None,
            ),
        )
        .await
        .unwrap();

        // Lost race: the pre-check passes but the insert hits the unique pair.
        let mut entries = MockWatchlistRepository::new();
        entries.expect_find_entry().returning(|_, _| Ok(None));
        entries
            .expect_add()
            .returning(|_| Err(CatalogError::AlreadyInWatchlist));

        let service = WatchlistService::new(entries, store, users);
        let result = service.add(movie.id, "alice").await;

        assert!(matches!(result, Err(CatalogError::AlreadyInWatchlist)));
    }
}
