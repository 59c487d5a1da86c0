//! Review listing and creation.
//!
//! Creation runs a fixed sequence and stops at the first failure:
//! rating check, identifier decoding, duplicate lookup, insert. Nothing is
//! sent to storage until both validation steps have passed.

use super::duplicate_gate;
use super::errors::{Result, ReviewError};
use super::validation::{decode_identifier, validate_identifiers, validate_rating};
use crate::db::{ReviewRepository, StorageError};
use crate::forms::CreateReview;
use crate::models::{NewReview, Review};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::field;

#[derive(Clone)]
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
    operation_timeout: Duration,
}

impl ReviewService {
    /// `operation_timeout` bounds each storage call separately.
    pub fn new(repository: Arc<dyn ReviewRepository>, operation_timeout: Duration) -> Self {
        Self {
            repository,
            operation_timeout,
        }
    }

    #[tracing::instrument(
        name = "review.list",
        skip(self),
        fields(layer = "logic", product.id = %product_id, reviews.count = field::Empty)
    )]
    pub async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>> {
        let product_key = decode_identifier("product_id", product_id)?;

        let reviews = self
            .bounded("list reviews", self.repository.list_by_product(product_key))
            .await?;

        tracing::Span::current().record("reviews.count", reviews.len());
        Ok(reviews)
    }

    #[tracing::instrument(
        name = "review.create",
        skip(self, request),
        fields(
            layer = "logic",
            product.id = %request.product_id,
            review.id = field::Empty,
            review.created = field::Empty,
        )
    )]
    pub async fn create_review(&self, request: CreateReview) -> Result<Review> {
        let span = tracing::Span::current();

        let result = self.try_create(request).await;
        match &result {
            Ok(review) => {
                span.record("review.id", field::display(review.id));
                span.record("review.created", true);
                tracing::info!(review_id = %review.id, "Review created");
            }
            Err(err) => {
                span.record("review.created", false);
                tracing::info!(error = %err, "Review rejected");
            }
        }
        result
    }

    async fn try_create(&self, request: CreateReview) -> Result<Review> {
        validate_rating(request.rating)?;
        let (product_id, user_id) = validate_identifiers(&request.product_id, &request.user_id)?;

        let duplicate = self
            .bounded(
                "check existing review",
                duplicate_gate::exists(self.repository.as_ref(), product_id, user_id),
            )
            .await?;
        if duplicate {
            return Err(ReviewError::DuplicateReview {
                product_id: request.product_id,
                user_id: request.user_id,
            });
        }

        let new_review = NewReview {
            product_id,
            user_id,
            rating: request.rating,
            title: request.title,
            comment: request.comment,
        };

        // A concurrent request for the same pair can pass the lookup above;
        // the storage uniqueness constraint catches it here.
        let inserted = match self
            .timed("insert review", self.repository.insert(&new_review))
            .await?
        {
            Ok(inserted) => inserted,
            Err(StorageError::UniqueViolation(detail)) => {
                tracing::warn!(detail = %detail, "Insert rejected by uniqueness constraint");
                return Err(ReviewError::DuplicateReview {
                    product_id: request.product_id,
                    user_id: request.user_id,
                });
            }
            Err(source) => {
                return Err(ReviewError::Storage {
                    operation: "insert review",
                    source,
                })
            }
        };

        Ok(new_review.into_review(inserted))
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, StorageError>>,
    {
        self.timed(operation, fut)
            .await?
            .map_err(|source| ReviewError::Storage { operation, source })
    }

    /// Bounds `fut` by the operation timeout. Expiry only abandons the wait:
    /// a PostgreSQL insert that was already sent may still commit, so a retry
    /// of the same request can end in `DuplicateReview`.
    async fn timed<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::time::timeout(self.operation_timeout, fut)
            .await
            .map_err(|_| {
                tracing::warn!(
                    operation,
                    timeout_ms = self.operation_timeout.as_millis() as u64,
                    "Storage operation timed out"
                );
                ReviewError::Cancelled {
                    operation,
                    timeout: self.operation_timeout,
                }
            })
    }
}
