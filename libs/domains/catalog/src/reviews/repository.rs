use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::Review;
use crate::error::{CatalogError, CatalogResult};
use crate::repository::InMemoryCatalogRepository;

/// Review store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review. A second review for the same user and movie is
    /// rejected atomically with [`CatalogError::DuplicateReview`].
    async fn create(&self, review: Review) -> CatalogResult<Review>;

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Review>>;

    async fn find_by_user_and_movie(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<Review>>;

    async fn list_by_movie(&self, movie_id: Uuid) -> CatalogResult<Vec<Review>>;

    async fn list_by_user(&self, user_id: Uuid) -> CatalogResult<Vec<Review>>;

    /// Ratings grouped by movie. Movies without reviews are absent from the map.
    async fn ratings_by_movie(&self, movie_ids: &[Uuid]) -> CatalogResult<HashMap<Uuid, Vec<i32>>>;

    async fn update(&self, review: Review) -> CatalogResult<Review>;

    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    async fn count(&self) -> CatalogResult<u64>;
}

fn oldest_first(mut reviews: Vec<Review>) -> Vec<Review> {
    reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    reviews
}

#[async_trait]
impl ReviewRepository for InMemoryCatalogRepository {
    async fn create(&self, review: Review) -> CatalogResult<Review> {
        let mut state = self.state.write().await;

        let duplicate = state
            .reviews
            .values()
            .any(|r| r.user_id == review.user_id && r.movie_id == review.movie_id);
        if duplicate {
            return Err(CatalogError::DuplicateReview);
        }

        state.reviews.insert(review.id, review.clone());

        tracing::info!(review_id = %review.id, movie_id = %review.movie_id, "Created review");
        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Review>> {
        Ok(self.state.read().await.reviews.get(&id).cloned())
    }

    async fn find_by_user_and_movie(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .values()
            .find(|r| r.user_id == user_id && r.movie_id == movie_id)
            .cloned())
    }

    async fn list_by_movie(&self, movie_id: Uuid) -> CatalogResult<Vec<Review>> {
        let state = self.state.read().await;
        let reviews = state
            .reviews
            .values()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect();
        Ok(oldest_first(reviews))
    }

    async fn list_by_user(&self, user_id: Uuid) -> CatalogResult<Vec<Review>> {
        let state = self.state.read().await;
        let reviews = state
            .reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        Ok(oldest_first(reviews))
    }

    async fn ratings_by_movie(&self, movie_ids: &[Uuid]) -> CatalogResult<HashMap<Uuid, Vec<i32>>> {
        let state = self.state.read().await;
        let mut ratings: HashMap<Uuid, Vec<i32>> = HashMap::new();

        for review in state.reviews.values() {
            if movie_ids.contains(&review.movie_id) {
                ratings.entry(review.movie_id).or_default().push(review.rating);
            }
        }
        Ok(ratings)
    }

    async fn update(&self, review: Review) -> CatalogResult<Review> {
        let mut state = self.state.write().await;
        let stored = state
            .reviews
            .get_mut(&review.id)
            .ok_or(CatalogError::ReviewNotFound(review.id))?;
        *stored = review.clone();

        tracing::info!(review_id = %review.id, "Updated review");
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let removed = self.state.write().await.reviews.remove(&id).is_some();
        if removed {
            tracing::info!(review_id = %id, "Deleted review");
        }
        Ok(removed)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.state.read().await.reviews.len() as u64)
    }
}
