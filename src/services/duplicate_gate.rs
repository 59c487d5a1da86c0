use crate::db::{ReviewRepository, StorageError};
use crate::models::Key;

/// Whether `user_id` has already reviewed `product_id`. A missing row is
/// `Ok(false)`; only a failing lookup is an error.
pub async fn exists(
    repository: &dyn ReviewRepository,
    product_id: Key,
    user_id: Key,
) -> Result<bool, StorageError> {
    let existing = repository
        .find_by_product_and_user(product_id, user_id)
        .await?;

    if let Some(review) = existing {
        tracing::info!(
            review_id = %review.id,
            product_id = %product_id,
            user_id = %user_id,
            "Review already exists"
        );
    }

    Ok(existing.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryReviewRepository;
    use crate::models::NewReview;

    fn key(value: i64) -> Key {
        Key::try_from(value).unwrap()
    }

    #[tokio::test]
    async fn test_absent_pair_is_not_an_error() {
        let repo = InMemoryReviewRepository::new();
        assert_eq!(exists(&repo, key(10), key(3)).await, Ok(false));
    }

    #[tokio::test]
    async fn test_existing_pair_detected() {
        let repo = InMemoryReviewRepository::new();
        repo.insert(&NewReview {
            product_id: key(10),
            user_id: key(3),
            rating: 5,
            title: None,
            comment: None,
        })
        .await
        .unwrap();

        assert_eq!(exists(&repo, key(10), key(3)).await, Ok(true));
        assert_eq!(exists(&repo, key(3), key(10)).await, Ok(false));
    }
}
