use sea_orm::{DatabaseConnection, DbErr, SqlErr};

/// PostgreSQL catalog.
///
/// Implements the movie, review and watchlist store traits; cascades and
/// `(user_id, movie_id)` uniqueness come from the schema.
#[derive(Clone)]
pub struct PgCatalogRepository {
    pub(crate) db: DatabaseConnection,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
