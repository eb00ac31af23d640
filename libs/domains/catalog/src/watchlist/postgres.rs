use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use super::entity;
use super::models::WatchlistEntry;
use super::repository::WatchlistRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::postgres::{PgCatalogRepository, is_unique_violation};

#[async_trait]
impl WatchlistRepository for PgCatalogRepository {
    async fn add(&self, entry: WatchlistEntry) -> CatalogResult<WatchlistEntry> {
        let txn = self.db.begin().await?;

        let existing = entity::Entity::find()
            .filter(entity::Column::UserId.eq(entry.user_id))
            .filter(entity::Column::MovieId.eq(entry.movie_id))
            .count(&txn)
            .await?;
        if existing > 0 {
            return Err(CatalogError::AlreadyInWatchlist);
        }

        let model = entity::ActiveModel::from(&entry)
            .insert(&txn)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CatalogError::AlreadyInWatchlist
                } else {
                    e.into()
                }
            })?;
        txn.commit().await?;

        tracing::info!(user_id = %model.user_id, movie_id = %model.movie_id, "Added to watchlist");
        Ok(model.into())
    }

    async fn find_entry(
        &self,
        user_id: Uuid,
        movie_id: Uuid,
    ) -> CatalogResult<Option<WatchlistEntry>> {
        let model = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::MovieId.eq(movie_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_for_user(&self, user_id: Uuid) -> CatalogResult<Vec<WatchlistEntry>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_asc(entity::Column::AddedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn remove(&self, user_id: Uuid, movie_id: Uuid) -> CatalogResult<bool> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = %user_id, movie_id = %movie_id, "Removed from watchlist");
        }
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
