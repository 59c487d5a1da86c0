//! Review storage.
//!
//! The review service only talks to storage through [`ReviewRepository`], so
//! it can run against PostgreSQL in production and an in-memory store in
//! tests.

use crate::models::{InsertedReview, Key, NewReview, Review, ReviewRef};
use async_trait::async_trait;

mod memory;
pub mod review;

pub use memory::InMemoryReviewRepository;
pub use review::PgReviewRepository;

/// Failures reported by a storage backend. "No matching row" is never an
/// error; lookups return `Option` or an empty list instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The (product, user) uniqueness constraint rejected an insert.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("query failed: {0}")]
    Query(String),
    #[error("malformed row: {0}")]
    MalformedRow(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find any review written by `user_id` for `product_id`.
    async fn find_by_product_and_user(
        &self,
        product_id: Key,
        user_id: Key,
    ) -> Result<Option<ReviewRef>, StorageError>;

    /// Insert a single row, returning the generated id and creation time.
    async fn insert(&self, review: &NewReview) -> Result<InsertedReview, StorageError>;

    /// All reviews of a product, most recent first.
    async fn list_by_product(&self, product_id: Key) -> Result<Vec<Review>, StorageError>;
}
