use axum_helpers::extractors::{empty_as_none, null_as_default};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Rejects titles that are only whitespace.
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank")
            .with_message("Title is required".into()));
    }
    Ok(())
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieType {
    #[default]
    #[sea_orm(string_value = "MOVIE")]
    Movie,
    #[sea_orm(string_value = "TV_SERIES")]
    TvSeries,
}

/// Listing sort keys. All sort descending with missing values last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MovieSort {
    /// Average review rating
    Rating,
    /// Number of reviews
    Reviews,
    /// IMDb rating
    Imdb,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub image_url: Option<String>,
    /// Free text, comma separated by convention
    pub actors: Option<String>,
    pub movie_type: MovieType,
    /// Only meaningful for TV series
    pub seasons: Option<i32>,
    pub episodes: Option<i32>,
    pub imdb_id: Option<String>,
    pub imdb_rating: Option<f64>,
    /// Username of the creator at the time of creation
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(input: MovieRequest, created_by: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            release_year: input.release_year,
            genre: input.genre,
            director: input.director,
            image_url: input.image_url,
            actors: input.actors,
            movie_type: input.movie_type.unwrap_or_default(),
            seasons: input.seasons,
            episodes: input.episodes,
            imdb_id: input.imdb_id,
            imdb_rating: input.imdb_rating,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace from a request. `type` is kept when the request omits it.
    pub fn apply(&mut self, input: MovieRequest) {
        self.title = input.title;
        self.description = input.description;
        self.release_year = input.release_year;
        self.genre = input.genre;
        self.director = input.director;
        self.image_url = input.image_url;
        self.actors = input.actors;
        if let Some(movie_type) = input.movie_type {
            self.movie_type = movie_type;
        }
        self.seasons = input.seasons;
        self.episodes = input.episodes;
        self.imdb_id = input.imdb_id;
        self.imdb_rating = input.imdb_rating;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match on title, description, director or genre.
    /// `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };

        self.title.to_lowercase().contains(needle)
            || contains(&self.description)
            || contains(&self.director)
            || contains(&self.genre)
    }
}

/// Create and update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(
        length(max = 255, message = "Title cannot exceed 255 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Arrival")]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 1870, max = 2100))]
    #[schema(example = 2016)]
    pub release_year: Option<i32>,
    #[schema(example = "Sci-Fi")]
    pub genre: Option<String>,
    #[schema(example = "Denis Villeneuve")]
    pub director: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(max = 500))]
    pub actors: Option<String>,
    /// Defaults to `MOVIE` on create; kept unchanged on update when omitted
    #[serde(rename = "type")]
    pub movie_type: Option<MovieType>,
    #[validate(range(min = 0))]
    pub seasons: Option<i32>,
    #[validate(range(min = 0))]
    pub episodes: Option<i32>,
    pub imdb_id: Option<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub imdb_rating: Option<f64>,
}

/// Movie as returned by the API, with review aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub image_url: Option<String>,
    pub actors: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: MovieType,
    pub seasons: Option<i32>,
    pub episodes: Option<i32>,
    pub imdb_id: Option<String>,
    pub imdb_rating: Option<f64>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Mean review rating; null without reviews
    pub average_rating: Option<f64>,
    pub review_count: Option<u64>,
}

impl MovieResponse {
    /// Projection with aggregates computed from the movie's review ratings.
    pub fn enriched(movie: Movie, ratings: &[i32]) -> Self {
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
            Some(sum as f64 / ratings.len() as f64)
        };

        Self {
            average_rating,
            review_count: Some(ratings.len() as u64),
            ..Self::from(movie)
        }
    }
}

/// Projection without aggregates, as embedded in watchlist entries.
impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            release_year: movie.release_year,
            genre: movie.genre,
            director: movie.director,
            image_url: movie.image_url,
            actors: movie.actors,
            movie_type: movie.movie_type,
            seasons: movie.seasons,
            episodes: movie.episodes,
            imdb_id: movie.imdb_id,
            imdb_rating: movie.imdb_rating,
            created_by: movie.created_by,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
            average_rating: None,
            review_count: None,
        }
    }
}

/// Query parameters for `GET /movies`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieFilter {
    /// `MOVIE` or `TV_SERIES`; empty means any
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub movie_type: Option<MovieType>,
    /// `rating`, `reviews` or `imdb`; anything else keeps store order
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<String>,
    /// Case-insensitive exact genre
    pub genre: Option<String>,
    /// Case-insensitive exact director
    pub director: Option<String>,
    /// Release year
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
}

impl MovieFilter {
    pub fn sort_key(&self) -> Option<MovieSort> {
        self.sort.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let eq_ignore_case = |wanted: &Option<String>, actual: &Option<String>| match wanted {
            None => true,
            Some(wanted) => actual
                .as_deref()
                .is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)),
        };

        self.movie_type.is_none_or(|t| movie.movie_type == t)
            && self.year.is_none_or(|y| movie.release_year == Some(y))
            && eq_ignore_case(&self.genre, &movie.genre)
            && eq_ignore_case(&self.director, &movie.director)
    }
}

/// Query parameters for `GET /movies/search`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched against title, description, director and genre
    pub keyword: String,
}
