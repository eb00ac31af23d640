use domain_users::{User, UserRepository};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::models::{Review, ReviewRequest, ReviewResponse};
use super::repository::ReviewRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::movies::{Movie, MovieRepository};

/// Review CRUD with ownership and one-review-per-movie rules.
#[derive(Clone)]
pub struct ReviewService<V: ReviewRepository, M: MovieRepository, U: UserRepository> {
    reviews: Arc<V>,
    movies: Arc<M>,
    users: Arc<U>,
}

impl<V, M, U> ReviewService<V, M, U>
where
    V: ReviewRepository,
    M: MovieRepository,
    U: UserRepository,
{
    pub fn new(reviews: V, movies: M, users: U) -> Self {
        Self {
            reviews: Arc::new(reviews),
            movies: Arc::new(movies),
            users: Arc::new(users),
        }
    }

    pub async fn add_review(
        &self,
        movie_id: Uuid,
        input: ReviewRequest,
        acting_username: &str,
    ) -> CatalogResult<ReviewResponse> {
        let user = self.find_user(acting_username).await?;
        let movie = self.find_movie(movie_id).await?;

        if self
            .reviews
            .find_by_user_and_movie(user.id, movie_id)
            .await?
            .is_some()
        {
            return Err(CatalogError::DuplicateReview);
        }

        let review = Review::new(user.id, movie_id, input.rating, input.comment);
        let created = self.reviews.create(review).await?;
        Ok(ReviewResponse::new(created, &user.username, &movie))
    }

    pub async fn update_review(
        &self,
        id: Uuid,
        input: ReviewRequest,
        acting_username: &str,
    ) -> CatalogResult<ReviewResponse> {
        let (mut review, owner) = self
            .owned_review(id, acting_username, CatalogError::ReviewEditForbidden)
            .await?;
        let movie = self.find_movie(review.movie_id).await?;

        review.apply(input);
        let updated = self.reviews.update(review).await?;
        Ok(ReviewResponse::new(updated, &owner.username, &movie))
    }

    pub async fn delete_review(&self, id: Uuid, acting_username: &str) -> CatalogResult<()> {
        self.owned_review(id, acting_username, CatalogError::ReviewDeleteForbidden)
            .await?;

        if !self.reviews.delete(id).await? {
            return Err(CatalogError::ReviewNotFound(id));
        }
        Ok(())
    }

    /// Reviews of one movie. An unknown movie has no reviews.
    pub async fn list_for_movie(&self, movie_id: Uuid) -> CatalogResult<Vec<ReviewResponse>> {
        let Some(movie) = self.movies.find_by_id(movie_id).await? else {
            return Ok(Vec::new());
        };

        let reviews = self.reviews.list_by_movie(movie_id).await?;
        let user_ids: Vec<Uuid> = unique(reviews.iter().map(|r| r.user_id));
        let usernames: HashMap<Uuid, String> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        Ok(reviews
            .into_iter()
            .filter_map(|review| {
                let username = usernames.get(&review.user_id)?.clone();
                Some(ReviewResponse::new(review, &username, &movie))
            })
            .collect())
    }

    /// Every review written by `username`.
    pub async fn list_for_user(&self, username: &str) -> CatalogResult<Vec<ReviewResponse>> {
        let user = self.find_user(username).await?;

        let reviews = self.reviews.list_by_user(user.id).await?;
        let movie_ids: Vec<Uuid> = unique(reviews.iter().map(|r| r.movie_id));
        let movies: HashMap<Uuid, Movie> = self
            .movies
            .find_by_ids(&movie_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok(reviews
            .into_iter()
            .filter_map(|review| {
                let movie = movies.get(&review.movie_id)?;
                Some(ReviewResponse::new(review, &user.username, movie))
            })
            .collect())
    }

    /// Load a review and its author, failing with `denied` unless the author
    /// is `acting_username`.
    async fn owned_review(
        &self,
        id: Uuid,
        acting_username: &str,
        denied: CatalogError,
    ) -> CatalogResult<(Review, User)> {
        let review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ReviewNotFound(id))?;

        let owner = self
            .users
            .find_by_id(review.user_id)
            .await?
            .ok_or(CatalogError::UserNotFound)?;

        if owner.username != acting_username {
            tracing::warn!(
                review_id = %id,
                owner = %owner.username,
                acting = %acting_username,
                "Review ownership check failed"
            );
            return Err(denied);
        }

        Ok((review, owner))
    }

    async fn find_user(&self, username: &str) -> CatalogResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(CatalogError::UserNotFound)
    }

    async fn find_movie(&self, id: Uuid) -> CatalogResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))
    }
}

fn unique(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::MovieRequest;
    use crate::movies::repository::MockMovieRepository;
    use crate::reviews::repository::MockReviewRepository;
    use domain_users::{InMemoryUserRepository, Role};
    use mockall::predicate::eq;

    async fn users_with(names: &[&str]) -> (InMemoryUserRepository, Vec<User>) {
        let repo = InMemoryUserRepository::new();
        let mut created = Vec::new();
        for name in names {
            let user = User::new(
                name.to_string(),
                format!("{}@x.com", name),
                "hash".into(),
                Role::User,
            );
            created.push(repo.create(user).await.unwrap());
        }
        (repo, created)
    }

    fn movie() -> Movie {
        Movie::new(
            MovieRequest {
                title: "Arrival".into(),
                image_url: Some("https://img/arrival.jpg".into()),
                ..Default::default()
            },
            None,
        )
    }

    fn movies_returning(movie: Movie) -> MockMovieRepository {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_id()
            .returning(move |_| Ok(Some(movie.clone())));
        movies
    }

    fn request(rating: i32) -> ReviewRequest {
        ReviewRequest {
            rating,
            comment: Some("great".into()),
        }
    }

    #[tokio::test]
    async fn test_add_review_returns_display_fields() {
        let (users, _) = users_with(&["alice"]).await;
        let movie = movie();
        let movie_id = movie.id;

        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_user_and_movie()
            .returning(|_, _| Ok(None));
        reviews.expect_create().times(1).returning(|r| Ok(r));

        let service = ReviewService::new(reviews, movies_returning(movie), users);
        let response = service.add_review(movie_id, request(9), "alice").await.unwrap();

        assert_eq!(response.username, "alice");
        assert_eq!(response.movie_title, "Arrival");
        assert_eq!(response.movie_image_url.as_deref(), Some("https://img/arrival.jpg"));
        assert_eq!(response.rating, 9);
    }

    #[tokio::test]
    async fn test_second_review_is_conflict() {
        let (users, created) = users_with(&["alice"]).await;
        let movie = movie();
        let movie_id = movie.id;
        let existing = Review::new(created[0].id, movie_id, 8, None);

        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_user_and_movie()
            .with(eq(created[0].id), eq(movie_id))
            .returning(move |_, _| Ok(Some(existing.clone())));
        reviews.expect_create().never();

        let service = ReviewService::new(reviews, movies_returning(movie), users);
        let result = service.add_review(movie_id, request(3), "alice").await;

        assert!(matches!(result, Err(CatalogError::DuplicateReview)));
    }

    #[tokio::test]
    async fn test_review_for_missing_movie_is_not_found() {
        let (users, _) = users_with(&["alice"]).await;

        let mut movies = MockMovieRepository::new();
        movies.expect_find_by_id().returning(|_| Ok(None));

        let service = ReviewService::new(MockReviewRepository::new(), movies, users);
        let result = service.add_review(Uuid::now_v7(), request(9), "alice").await;

        assert!(matches!(result, Err(CatalogError::MovieNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_by_other_user_is_forbidden() {
        let (users, created) = users_with(&["alice", "bob"]).await;
        let review = Review::new(created[0].id, Uuid::now_v7(), 8, None);
        let review_id = review.id;

        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(move |_| Ok(Some(review.clone())));
        reviews.expect_update().never();

        let service = ReviewService::new(reviews, MockMovieRepository::new(), users);
        let result = service.update_review(review_id, request(1), "bob").await;

        assert!(matches!(result, Err(CatalogError::ReviewEditForbidden)));
    }

    #[tokio::test]
    async fn test_delete_by_other_user_is_forbidden() {
        let (users, created) = users_with(&["alice", "bob"]).await;
        let review = Review::new(created[0].id, Uuid::now_v7(), 8, None);
        let review_id = review.id;

        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(move |_| Ok(Some(review.clone())));
        reviews.expect_delete().never();

        let service = ReviewService::new(reviews, MockMovieRepository::new(), users);
        let result = service.delete_review(review_id, "bob").await;

        assert!(matches!(result, Err(CatalogError::ReviewDeleteForbidden)));
    }

    #[tokio::test]
    async fn test_owner_update_overwrites_rating_and_comment() {
        let (users, created) = users_with(&["alice"]).await;
        let movie = movie();
        let review = Review::new(created[0].id, movie.id, 8, Some("ok".into()));
        let review_id = review.id;

        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(move |_| Ok(Some(review.clone())));
        reviews.expect_update().times(1).returning(|r| Ok(r));

        let service = ReviewService::new(reviews, movies_returning(movie), users);
        let response = service
            .update_review(
                review_id,
                ReviewRequest {
                    rating: 10,
                    comment: None,
                },
                "alice",
            )
            .await
            .unwrap();

        assert_eq!(response.rating, 10);
        assert_eq!(response.comment, None);
        assert!(response.updated_at >= response.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_review_is_not_found() {
        let (users, _) = users_with(&["alice"]).await;

        let mut reviews = MockReviewRepository::new();
        reviews.expect_find_by_id().returning(|_| Ok(None));

        let service = ReviewService::new(reviews, MockMovieRepository::new(), users);
        let result = service.update_review(Uuid::now_v7(), request(5), "alice").await;

        assert!(matches!(result, Err(CatalogError::ReviewNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_for_unknown_user_is_not_found() {
        let (users, _) = users_with(&[]).await;

        let service =
            ReviewService::new(MockReviewRepository::new(), MockMovieRepository::new(), users);
        let result = service.list_for_user("ghost").await;

        assert!(matches!(result, Err(CatalogError::UserNotFound)));
    }
}
