use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::From;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Review {
    fn from(review: models::Review) -> Self {
        Self {
            id: models::encode(review.id),
            product_id: models::encode(review.product_id),
            user_id: models::encode(review.user_id),
            rating: review.rating,
            title: review.title,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Key;

    #[test]
    fn test_identifiers_rendered_as_strings() {
        let review = models::Review {
            id: Key::try_from(1).unwrap(),
            product_id: Key::try_from(10).unwrap(),
            user_id: Key::try_from(3).unwrap(),
            rating: 5,
            title: Some("Great".to_string()),
            comment: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(Review::from(review)).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["product_id"], "10");
        assert_eq!(json["user_id"], "3");
        assert_eq!(json["rating"], 5);
        assert_eq!(json["title"], "Great");
        assert!(json["comment"].is_null());
    }
}
