use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique violations that slip past the pre-insert checks still surface as conflicts.
fn map_insert_error(err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            UserError::EmailTaken
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::UsernameTaken,
        _ => err.into(),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let txn = self.db.begin().await?;

        let username_taken = entity::Entity::find()
            .filter(entity::Column::Username.eq(&user.username))
            .count(&txn)
            .await?
            > 0;
        if username_taken {
            return Err(UserError::UsernameTaken);
        }

        let email_taken = entity::Entity::find()
            .filter(entity::Column::Email.eq(&user.email))
            .count(&txn)
            .await?
            > 0;
        if email_taken {
            return Err(UserError::EmailTaken);
        }

        let model = entity::ActiveModel::from(&user)
            .insert(&txn)
            .await
            .map_err(map_insert_error)?;
        txn.commit().await?;

        tracing::info!(user_id = %model.id, username = %model.username, "Created user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> UserResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> UserResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use test_utils::TestDatabase;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_create_and_find_by_username() {
        let db = TestDatabase::new().await;
        let repo = PgUserRepository::new(db.connection());

        let user = User::new("alice".into(), "alice@x.com".into(), "hash".into(), Role::User);
        let created = repo.create(user).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.role, Role::User);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_duplicates_are_conflicts() {
        let db = TestDatabase::new().await;
        let repo = PgUserRepository::new(db.connection());

        repo.create(User::new("alice".into(), "alice@x.com".into(), "h".into(), Role::User))
            .await
            .unwrap();

        let same_name = repo
            .create(User::new("alice".into(), "a2@x.com".into(), "h".into(), Role::User))
            .await;
        assert!(matches!(same_name, Err(UserError::UsernameTaken)));

        let same_email = repo
            .create(User::new("alicia".into(), "alice@x.com".into(), "h".into(), Role::User))
            .await;
        assert!(matches!(same_email, Err(UserError::EmailTaken)));
    }
}
