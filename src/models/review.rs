use crate::models::Key;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Key,
    pub product_id: Key,
    pub user_id: Key,
    pub rating: i32,               // 1..=5, checked before insert
    pub title: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>, // assigned by storage
}

/// Validated fields of a review that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub product_id: Key,
    pub user_id: Key,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
}

/// Values generated by storage on insert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertedReview {
    pub id: Key,
    pub created_at: DateTime<Utc>,
}

/// Reference to an existing review, as returned by the duplicate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewRef {
    pub id: Key,
}

impl NewReview {
    pub fn into_review(self, inserted: InsertedReview) -> Review {
        Review {
            id: inserted.id,
            product_id: self.product_id,
            user_id: self.user_id,
            rating: self.rating,
            title: self.title,
            comment: self.comment,
            created_at: inserted.created_at,
        }
    }
}
