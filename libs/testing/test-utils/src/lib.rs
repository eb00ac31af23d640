//! Shared test utilities for the domain crates.
//!
//! - `TestDatabase`: migrated PostgreSQL container (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let user_id = db.create_test_user(&builder.username("reviewer")).await;
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded builder so the same test always produces the same data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_add_review");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Username that fits the 3..=50 character rule.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// assert_eq!(TestDataBuilder::new(7).username("reviewer"), "u7_reviewer");
    /// ```
    pub fn username(&self, suffix: &str) -> String {
        format!("u{}_{}", self.seed % 1_000_000, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test1");

        assert_eq!(builder1.username("a"), builder2.username("a"));
    }

    #[test]
    fn test_username_length_is_valid() {
        let username = TestDataBuilder::new(u64::MAX).username("reviewer");
        assert!((3..=50).contains(&username.chars().count()));
    }
}
