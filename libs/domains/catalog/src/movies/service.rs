use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

use super::models::{Movie, MovieFilter, MovieRequest, MovieResponse, MovieSort};
use super::repository::MovieRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::reviews::ReviewRepository;

/// Catalog CRUD, search and sorting. Responses carry review aggregates.
#[derive(Clone)]
pub struct MovieService<M: MovieRepository, V: ReviewRepository> {
    movies: Arc<M>,
    reviews: Arc<V>,
}

impl<M: MovieRepository, V: ReviewRepository> MovieService<M, V> {
    pub fn new(movies: M, reviews: V) -> Self {
        Self {
            movies: Arc::new(movies),
            reviews: Arc::new(reviews),
        }
    }

    pub async fn create_movie(
        &self,
        input: MovieRequest,
        acting_username: &str,
    ) -> CatalogResult<MovieResponse> {
        let movie = Movie::new(input, Some(acting_username.to_string()));
        let created = self.movies.create(movie).await?;
        self.enrich_one(created).await
    }

    pub async fn get_movie(&self, id: Uuid) -> CatalogResult<MovieResponse> {
        let movie = self.find_movie(id).await?;
        self.enrich_one(movie).await
    }

    /// Filtered listing, then the optional sort key. Unknown keys keep store order.
    pub async fn list_movies(&self, filter: MovieFilter) -> CatalogResult<Vec<MovieResponse>> {
        let movies = self.movies.list(&filter).await?;
        let mut responses = self.enrich(movies).await?;

        if let Some(sort) = filter.sort_key() {
            sort_movies(&mut responses, sort);
        }
        Ok(responses)
    }

    pub async fn search_movies(&self, keyword: &str) -> CatalogResult<Vec<MovieResponse>> {
        let movies = self.movies.search(keyword).await?;
        self.enrich(movies).await
    }

    pub async fn update_movie(&self, id: Uuid, input: MovieRequest) -> CatalogResult<MovieResponse> {
        let mut movie = self.find_movie(id).await?;
        movie.apply(input);

        let updated = self.movies.update(movie).await?;
        self.enrich_one(updated).await
    }

    pub async fn delete_movie(&self, id: Uuid) -> CatalogResult<()> {
        if !self.movies.delete(id).await? {
            return Err(CatalogError::MovieNotFound(id));
        }
        Ok(())
    }

    async fn find_movie(&self, id: Uuid) -> CatalogResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::MovieNotFound(id))
    }

    async fn enrich_one(&self, movie: Movie) -> CatalogResult<MovieResponse> {
        let ratings = self.reviews.ratings_by_movie(&[movie.id]).await?;
        let movie_ratings = ratings.get(&movie.id).map(Vec::as_slice).unwrap_or_default();
        Ok(MovieResponse::enriched(movie, movie_ratings))
    }

    /// One ratings lookup for the whole page.
    async fn enrich(&self, movies: Vec<Movie>) -> CatalogResult<Vec<MovieResponse>> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = movies.iter().map(|m| m.id).collect();
        let ratings = self.reviews.ratings_by_movie(&ids).await?;

        Ok(movies
            .into_iter()
            .map(|movie| {
                let movie_ratings = ratings.get(&movie.id).map(Vec::as_slice).unwrap_or_default();
                MovieResponse::enriched(movie, movie_ratings)
            })
            .collect())
    }
}

/// Descending with `None` last.
fn desc_nulls_last<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; ties keep their incoming order.
fn sort_movies(movies: &mut [MovieResponse], sort: MovieSort) {
    match sort {
        MovieSort::Rating => {
            movies.sort_by(|a, b| desc_nulls_last(a.average_rating, b.average_rating))
        }
        MovieSort::Reviews => movies.sort_by(|a, b| desc_nulls_last(a.review_count, b.review_count)),
        MovieSort::Imdb => movies.sort_by(|a, b| desc_nulls_last(a.imdb_rating, b.imdb_rating)),
    }
}
