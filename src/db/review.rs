use super::{ReviewRepository, StorageError};
use crate::models::{InsertedReview, Key, NewReview, Review, ReviewRef};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    product_id: i64,
    user_id: i64,
    rating: i32,
    title: Option<String>,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = StorageError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let key = |value: i64| {
            Key::try_from(value).map_err(|err| StorageError::MalformedRow(err.to_string()))
        };

        Ok(Review {
            id: key(row.id)?,
            product_id: key(row.product_id)?,
            user_id: key(row.user_id)?,
            rating: row.rating,
            title: row.title,
            comment: row.comment,
            created_at: row.created_at,
        })
    }
}

fn map_query_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StorageError::UniqueViolation(db_err.message().to_string())
        }
        err => StorageError::Query(err.to_string()),
    }
}

#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn find_by_product_and_user(
        &self,
        product_id: Key,
        user_id: Key,
    ) -> Result<Option<ReviewRef>, StorageError> {
        let query_span = tracing::info_span!("Search for existing review.");
        let id: Option<i64> = sqlx::query_scalar(
            r"SELECT id FROM reviews WHERE product_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(i64::from(product_id))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch review, error: {:?}", err);
            map_query_error(err)
        })?;

        id.map(|id| {
            Key::try_from(id)
                .map(|id| ReviewRef { id })
                .map_err(|err| StorageError::MalformedRow(err.to_string()))
        })
        .transpose()
    }

    async fn insert(&self, review: &NewReview) -> Result<InsertedReview, StorageError> {
        let query_span = tracing::info_span!("Saving new review into the database");
        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO reviews (product_id, user_id, rating, title, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(i64::from(review.product_id))
        .bind(i64::from(review.user_id))
        .bind(review.rating)
        .bind(review.title.as_deref())
        .bind(review.comment.as_deref())
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            map_query_error(err)
        })?;

        let id = Key::try_from(id).map_err(|err| StorageError::MalformedRow(err.to_string()))?;
        Ok(InsertedReview { id, created_at })
    }

    async fn list_by_product(&self, product_id: Key) -> Result<Vec<Review>, StorageError> {
        let query_span = tracing::info_span!("Fetch reviews by product id.");
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, product_id, user_id, rating, title, comment, created_at
            FROM reviews
            WHERE product_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(i64::from(product_id))
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch reviews, error: {:?}", err);
            map_query_error(err)
        })?;

        rows.into_iter().map(Review::try_from).collect()
    }
}
