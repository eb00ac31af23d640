use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::{Movie, MovieType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub actors: Option<String>,
    #[sea_orm(column_name = "type")]
    pub movie_type: MovieType,
    pub seasons: Option<i32>,
    pub episodes: Option<i32>,
    pub imdb_id: Option<String>,
    pub imdb_rating: Option<f64>,
    pub created_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Movie {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            release_year: model.release_year,
            genre: model.genre,
            director: model.director,
            image_url: model.image_url,
            actors: model.actors,
            movie_type: model.movie_type,
            seasons: model.seasons,
            episodes: model.episodes,
            imdb_id: model.imdb_id,
            imdb_rating: model.imdb_rating,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<&Movie> for ActiveModel {
    fn from(movie: &Movie) -> Self {
        ActiveModel {
            id: Set(movie.id),
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            release_year: Set(movie.release_year),
            genre: Set(movie.genre.clone()),
            director: Set(movie.director.clone()),
            image_url: Set(movie.image_url.clone()),
            actors: Set(movie.actors.clone()),
            movie_type: Set(movie.movie_type),
            seasons: Set(movie.seasons),
            episodes: Set(movie.episodes),
            imdb_id: Set(movie.imdb_id.clone()),
            imdb_rating: Set(movie.imdb_rating),
            created_by: Set(movie.created_by.clone()),
            created_at: Set(movie.created_at.into()),
            updated_at: Set(movie.updated_at.into()),
        }
    }
}
