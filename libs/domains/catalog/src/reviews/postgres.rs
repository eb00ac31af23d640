use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use super::entity;
use super::models::Review;
use super::repository::ReviewRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::postgres::{PgCatalogRepository, is_unique_violation};

#[async_trait]
impl ReviewRepository for PgCatalogRepository {
    async fn create(&self, review: Review) -> CatalogResult<Review> {
        let txn = self.db.begin().await?;

        let existing = entity::Entity::find()
            .filter(entity::Column::UserId.eq(review.user_id))
            .filter(entity::Column::MovieId.eq(review.movie_id))
            .count(&txn)
            .await?;
        if existing > 0 {
            return Err(CatalogError::DuplicateReview);
        }

        let model = entity::ActiveModel::from(&review)
            .insert(&txn)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CatalogError::DuplicateReview
                } else {
                    e.into()
                }
            })?;
        txn.commit().await?;

        tracing::info!(review_id = %model.id, movie_id = %model.movie_id, "Created review");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Review>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_user_and_movie(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<Review>> {
        let model = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::MovieId.eq(movie_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_movie(&self, movie_id: Uuid) -> CatalogResult<Vec<Review>> {
        let models = entity::Entity::find()
            .filter(entity::Column::MovieId.eq(movie_id))
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: Uuid) -> CatalogResult<Vec<Review>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn ratings_by_movie(&self, movie_ids: &[Uuid]) -> CatalogResult<HashMap<Uuid, Vec<i32>>> {
        if movie_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i32)> = entity::Entity::find()
            .select_only()
            .column(entity::Column::MovieId)
            .column(entity::Column::Rating)
            .filter(entity::Column::MovieId.is_in(movie_ids.iter().copied()))
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut ratings: HashMap<Uuid, Vec<i32>> = HashMap::new();
        for (movie_id, rating) in rows {
            ratings.entry(movie_id).or_default().push(rating);
        }
        Ok(ratings)
    }

    async fn update(&self, review: Review) -> CatalogResult<Review> {
        let model = entity::ActiveModel::from(&review)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CatalogError::ReviewNotFound(review.id),
                other => other.into(),
            })?;

        tracing::info!(review_id = %model.id, "Updated review");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(review_id = %id, "Deleted review");
        }
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{Movie, MovieRepository, MovieRequest};
    use test_utils::{TestDataBuilder, TestDatabase};

    async fn seed_movie(repo: &PgCatalogRepository, title: &str) -> Movie {
        let movie = Movie::new(
            MovieRequest {
                title: title.into(),
                ..Default::default()
            },
            None,
        );
        MovieRepository::create(repo, movie).await.unwrap()
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_one_review_per_user_and_movie() {
        let db = TestDatabase::new().await;
        let builder = TestDataBuilder::from_test_name("test_one_review_per_user_and_movie");
        let user_id = db.create_test_user(&builder.username("reviewer")).await;
        let repo = PgCatalogRepository::new(db.connection());
        let movie = seed_movie(&repo, "Arrival").await;

        let first = ReviewRepository::create(&repo, Review::new(user_id, movie.id, 9, None))
            .await
            .unwrap();
        let second =
            ReviewRepository::create(&repo, Review::new(user_id, movie.id, 3, None)).await;

        assert!(matches!(second, Err(CatalogError::DuplicateReview)));
        let ratings = repo.ratings_by_movie(&[movie.id]).await.unwrap();
        assert_eq!(ratings[&movie.id], vec![9]);
        assert_eq!(
            repo.find_by_user_and_movie(user_id, movie.id)
                .await
                .unwrap()
                .map(|r| r.id),
            Some(first.id)
        );
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_movie_delete_cascades_to_reviews() {
        let db = TestDatabase::new().await;
        let builder = TestDataBuilder::from_test_name("test_movie_delete_cascades_to_reviews");
        let user_id = db.create_test_user(&builder.username("reviewer")).await;
        let repo = PgCatalogRepository::new(db.connection());
        let movie = seed_movie(&repo, "Heat").await;

        let review = ReviewRepository::create(&repo, Review::new(user_id, movie.id, 7, None))
            .await
            .unwrap();
        assert!(MovieRepository::delete(&repo, movie.id).await.unwrap());

        assert!(ReviewRepository::find_by_id(&repo, review.id)
            .await
            .unwrap()
            .is_none());
    }
}
