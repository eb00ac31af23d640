use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    Statement, Value,
};
use uuid::Uuid;

use super::entity;
use super::models::{Movie, MovieFilter};
use super::repository::MovieRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::postgres::PgCatalogRepository;

/// Escape LIKE metacharacters so the keyword matches literally.
fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn list_statement(filter: &MovieFilter) -> Statement {
    let mut sql = String::from("SELECT * FROM movies WHERE TRUE");
    let mut values: Vec<Value> = Vec::new();

    if let Some(movie_type) = filter.movie_type {
        values.push(movie_type.to_string().into());
        sql.push_str(&format!(" AND type = ${}", values.len()));
    }
    if let Some(genre) = &filter.genre {
        values.push(genre.clone().into());
        sql.push_str(&format!(" AND LOWER(genre) = LOWER(${})", values.len()));
    }
    if let Some(director) = &filter.director {
        values.push(director.clone().into());
        sql.push_str(&format!(" AND LOWER(director) = LOWER(${})", values.len()));
    }
    if let Some(year) = filter.year {
        values.push(year.into());
        sql.push_str(&format!(" AND release_year = ${}", values.len()));
    }
    sql.push_str(" ORDER BY created_at, id");

    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

#[async_trait]
impl MovieRepository for PgCatalogRepository {
    async fn create(&self, movie: Movie) -> CatalogResult<Movie> {
        let model = entity::ActiveModel::from(&movie).insert(&self.db).await?;

        tracing::info!(movie_id = %model.id, title = %model.title, "Created movie");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Movie>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> CatalogResult<Vec<Movie>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let models = entity::Entity::find()
            .from_raw_sql(list_statement(filter))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, keyword: &str) -> CatalogResult<Vec<Movie>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT * FROM movies
               WHERE title ILIKE $1 OR description ILIKE $1 OR director ILIKE $1 OR genre ILIKE $1
               ORDER BY created_at, id"#,
            [like_pattern(keyword).into()],
        );

        let models = entity::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, movie: Movie) -> CatalogResult<Movie> {
        let model = entity::ActiveModel::from(&movie)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CatalogError::MovieNotFound(movie.id),
                other => other.into(),
            })?;

        tracing::info!(movie_id = %model.id, "Updated movie");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(movie_id = %id, "Deleted movie");
        }
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
