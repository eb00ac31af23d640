use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::WatchlistEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "watchlist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub added_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WatchlistEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            movie_id: model.movie_id,
            added_at: model.added_at.into(),
        }
    }
}

impl From<&WatchlistEntry> for ActiveModel {
    fn from(entry: &WatchlistEntry) -> Self {
        ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            movie_id: Set(entry.movie_id),
            added_at: Set(entry.added_at.into()),
        }
    }
}
