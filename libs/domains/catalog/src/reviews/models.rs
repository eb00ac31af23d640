use axum_helpers::extractors::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::movies::Movie;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, movie_id: Uuid, rating: i32, comment: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            movie_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, input: ReviewRequest) {
        self.rating = input.rating;
        self.comment = input.comment;
        self.updated_at = Utc::now();
    }
}

/// Create and update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewRequest {
    /// 1 to 10
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 1, max = 10, message = "Rating must be between 1 and 10"))]
    #[schema(example = 9, minimum = 1, maximum = 10)]
    pub rating: i32,
    #[validate(length(max = 2000, message = "Comment cannot exceed 2000 characters"))]
    #[schema(example = "great")]
    pub comment: Option<String>,
}

/// Review with the author's username and the movie's display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub movie_image_url: Option<String>,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewResponse {
    pub fn new(review: Review, username: &str, movie: &Movie) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            username: username.to_string(),
            movie_id: review.movie_id,
            movie_title: movie.title.clone(),
            movie_image_url: movie.image_url.clone(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let review = |rating| ReviewRequest { rating, comment: None };

        assert!(review(1).validate().is_ok());
        assert!(review(10).validate().is_ok());
        assert!(review(0).validate().is_err());
        assert!(review(11).validate().is_err());
    }

    #[test]
    fn test_missing_rating_fails_validation() {
        let input: ReviewRequest = serde_json::from_str(r#"{"comment": "no score"}"#).unwrap();
        assert!(input.validate().is_err());
    }
}
