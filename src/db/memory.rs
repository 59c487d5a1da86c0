use super::{ReviewRepository, StorageError};
use crate::models::{InsertedReview, Key, NewReview, Review, ReviewRef};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// Process-local review store.
///
/// Enforces the same (product, user) uniqueness as the `reviews` table, so an
/// insert that slips past the duplicate lookup fails with
/// [`StorageError::UniqueViolation`].
#[derive(Default)]
pub struct InMemoryReviewRepository {
    rows: RwLock<Vec<Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_product_and_user(
        &self,
        product_id: Key,
        user_id: Key,
    ) -> Result<Option<ReviewRef>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.product_id == product_id && row.user_id == user_id)
            .map(|row| ReviewRef { id: row.id }))
    }

    async fn insert(&self, review: &NewReview) -> Result<InsertedReview, StorageError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|row| row.product_id == review.product_id && row.user_id == review.user_id)
        {
            return Err(StorageError::UniqueViolation(format!(
                "review for product {} by user {} already exists",
                review.product_id, review.user_id
            )));
        }

        let id = Key::try_from(rows.len() as i64 + 1)
            .map_err(|err| StorageError::Query(err.to_string()))?;
        let inserted = InsertedReview {
            id,
            created_at: Utc::now(),
        };
        rows.push(review.clone().into_review(inserted));

        tracing::debug!(review_id = %id, "Stored review in memory");
        Ok(inserted)
    }

    async fn list_by_product(&self, product_id: Key) -> Result<Vec<Review>, StorageError> {
        let rows = self.rows.read().await;
        let mut reviews: Vec<Review> = rows
            .iter()
            .filter(|row| row.product_id == product_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_review(product: i64, user: i64) -> NewReview {
        NewReview {
            product_id: Key::try_from(product).unwrap(),
            user_id: Key::try_from(user).unwrap(),
            rating: 4,
            title: None,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryReviewRepository::new();
        let first = repo.insert(&new_review(1, 1)).await.unwrap();
        let second = repo.insert(&new_review(1, 2)).await.unwrap();

        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_enforces_uniqueness() {
        let repo = InMemoryReviewRepository::new();
        repo.insert(&new_review(1, 1)).await.unwrap();

        let result = repo.insert(&new_review(1, 1)).await;
        assert!(matches!(result, Err(StorageError::UniqueViolation(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_product_and_user() {
        let repo = InMemoryReviewRepository::new();
        let inserted = repo.insert(&new_review(10, 3)).await.unwrap();

        let found = repo
            .find_by_product_and_user(Key::try_from(10).unwrap(), Key::try_from(3).unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(ReviewRef { id: inserted.id }));

        let missing = repo
            .find_by_product_and_user(Key::try_from(10).unwrap(), Key::try_from(4).unwrap())
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_list_newest_first_and_filtered() {
        let repo = InMemoryReviewRepository::new();
        repo.insert(&new_review(10, 1)).await.unwrap();
        repo.insert(&new_review(11, 1)).await.unwrap();
        repo.insert(&new_review(10, 2)).await.unwrap();

        let reviews = repo
            .list_by_product(Key::try_from(10).unwrap())
            .await
            .unwrap();
        let users: Vec<i64> = reviews.iter().map(|r| r.user_id.value()).collect();
        assert_eq!(users, vec![2, 1]);
    }
}
