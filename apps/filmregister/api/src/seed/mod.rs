//! Startup seeding of sample users, movies, reviews and watchlists.
//!
//! Each table is filled only while it is empty, so restarts are idempotent.
//! Sample rows that reference a missing user or movie are skipped with a warning.

mod data;

use axum_helpers::JwtAuth;
use domain_catalog::{
    MovieFilter, MovieRepository, Review, ReviewRepository, WatchlistEntry, WatchlistRepository,
};
use domain_users::{AuthService, Role, User, UserRepository};
use std::collections::HashMap;
use strum::{Display, EnumString};
use tracing::{info, warn};
use uuid::Uuid;

type UuidByName = HashMap<String, Uuid>;

/// Profiles that load sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SeedProfile {
    DefaultInit,
    Demo,
}

pub struct Seeder<C, U: UserRepository> {
    catalog: C,
    users: U,
    auth: AuthService<U>,
}

impl<C, U> Seeder<C, U>
where
    C: MovieRepository + ReviewRepository + WatchlistRepository,
    U: UserRepository + Clone,
{
    pub fn new(catalog: C, users: U, jwt: JwtAuth) -> Self {
        let auth = AuthService::new(users.clone(), jwt);
        Self {
            catalog,
            users,
            auth,
        }
    }

    pub async fn run(&self, profile: SeedProfile) -> eyre::Result<()> {
        info!(%profile, "Loading sample data");

        self.seed_users().await?;
        self.seed_movies().await?;
        self.seed_reviews().await?;
        self.seed_watchlist().await?;
        Ok(())
    }

    async fn seed_users(&self) -> eyre::Result<()> {
        let existing = UserRepository::count(&self.users).await?;
        if existing > 0 {
            info!(count = existing, "Users already exist, skipping user initialization");
            return Ok(());
        }

        for (username, email) in data::USERS {
            self.auth
                .create_user(username.to_string(), email.to_string(), data::PASSWORD, Role::User)
                .await?;
        }
        info!(count = data::USERS.len(), "Sample users created");
        Ok(())
    }

    async fn seed_movies(&self) -> eyre::Result<()> {
        let existing = MovieRepository::count(&self.catalog).await?;
        if existing > 0 {
            info!(count = existing, "Content already exists, skipping initialization");
            return Ok(());
        }

        for movie in data::MOVIES {
            MovieRepository::create(&self.catalog, movie.to_movie()).await?;
        }
        info!(count = data::MOVIES.len(), "Starter content created");
        Ok(())
    }

    async fn seed_reviews(&self) -> eyre::Result<()> {
        let existing = ReviewRepository::count(&self.catalog).await?;
        if existing > 0 {
            info!(count = existing, "Reviews already exist, skipping review initialization");
            return Ok(());
        }

        let Some(users) = self.sample_users().await? else {
            warn!("Sample users not found, skipping review creation");
            return Ok(());
        };
        let movies = self.movie_ids_by_title().await?;

        let mut created = 0;
        for (username, title, rating, comment) in data::REVIEWS {
            let Some(&movie_id) = movies.get(*title) else {
                warn!(title = *title, "Movie not found, skipping review creation");
                continue;
            };
            let review = Review::new(users[*username], movie_id, *rating, Some(comment.to_string()));
            ReviewRepository::create(&self.catalog, review).await?;
            created += 1;
        }
        info!(count = created, "Sample reviews created");
        Ok(())
    }

    async fn seed_watchlist(&self) -> eyre::Result<()> {
        let existing = WatchlistRepository::count(&self.catalog).await?;
        if existing > 0 {
            info!(
                count = existing,
                "Watchlist items already exist, skipping watchlist initialization"
            );
            return Ok(());
        }

        let Some(users) = self.sample_users().await? else {
            warn!("Sample users not found, skipping watchlist creation");
            return Ok(());
        };
        let movies = self.movie_ids_by_title().await?;

        let mut created = 0;
        for (username, title) in data::WATCHLIST {
            let Some(&movie_id) = movies.get(*title) else {
                warn!(title = *title, "Movie not found, skipping watchlist addition");
                continue;
            };
            WatchlistRepository::add(&self.catalog, WatchlistEntry::new(users[*username], movie_id))
                .await?;
            created += 1;
        }
        info!(count = created, "Sample watchlist items created");
        Ok(())
    }

    /// Ids of all sample users, or `None` if any of them is missing.
    async fn sample_users(&self) -> eyre::Result<Option<UuidByName>> {
        let mut ids = UuidByName::new();
        for (username, _) in data::USERS {
            match self.users.find_by_username(username).await? {
                Some(User { id, .. }) => {
                    ids.insert(username.to_string(), id);
                }
                None => return Ok(None),
            }
        }
        Ok(Some(ids))
    }

    async fn movie_ids_by_title(&self) -> eyre::Result<UuidByName> {
        let movies = MovieRepository::list(&self.catalog, &MovieFilter::default()).await?;
        Ok(movies.into_iter().map(|m| (m.title, m.id)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::JwtConfig;
    use domain_catalog::InMemoryCatalogRepository;
    use domain_users::InMemoryUserRepository;

    fn seeder(
        catalog: &InMemoryCatalogRepository,
        users: &InMemoryUserRepository,
    ) -> Seeder<InMemoryCatalogRepository, InMemoryUserRepository> {
        let jwt = JwtAuth::new(&JwtConfig::new("seed-test-secret-at-least-32-chars!!").unwrap());
        Seeder::new(catalog.clone(), users.clone(), jwt)
    }

    async fn counts(catalog: &InMemoryCatalogRepository, users: &InMemoryUserRepository) -> [u64; 4] {
        [
            UserRepository::count(users).await.unwrap(),
            MovieRepository::count(catalog).await.unwrap(),
            ReviewRepository::count(catalog).await.unwrap(),
            WatchlistRepository::count(catalog).await.unwrap(),
        ]
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("default-init".parse::<SeedProfile>().unwrap(), SeedProfile::DefaultInit);
        assert_eq!("demo".parse::<SeedProfile>().unwrap(), SeedProfile::Demo);
        assert!("test".parse::<SeedProfile>().is_err());
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let catalog = InMemoryCatalogRepository::new();
        let users = InMemoryUserRepository::new();
        let seeder = seeder(&catalog, &users);

        seeder.run(SeedProfile::Demo).await.unwrap();
        assert_eq!(counts(&catalog, &users).await, [4, 25, 8, 10]);

        seeder.run(SeedProfile::Demo).await.unwrap();
        assert_eq!(counts(&catalog, &users).await, [4, 25, 8, 10]);
    }

    #[tokio::test]
    async fn test_missing_sample_users_skip_reviews_and_watchlist() {
        let catalog = InMemoryCatalogRepository::new();
        let users = InMemoryUserRepository::new();
        users
            .create(User::new("someone".into(), "someone@x.com".into(), "hash".into(), Role::User))
            .await
            .unwrap();

        seeder(&catalog, &users).run(SeedProfile::DefaultInit).await.unwrap();

        assert_eq!(counts(&catalog, &users).await, [1, 25, 0, 0]);
    }

    #[tokio::test]
    async fn test_sample_passwords_log_in() {
        let catalog = InMemoryCatalogRepository::new();
        let users = InMemoryUserRepository::new();
        let seeder = seeder(&catalog, &users);
        seeder.run(SeedProfile::Demo).await.unwrap();

        let response = seeder
            .auth
            .login(domain_users::LoginRequest {
                username: "cinephile".into(),
                password: data::PASSWORD.into(),
            })
            .await
            .unwrap();

        assert_eq!(response.username, "cinephile");
    }
}
