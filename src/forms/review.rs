use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `POST /api/v1/reviews`.
///
/// Only shape limits live here; the rating range and identifier format are
/// enforced by the review service.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateReview {
    #[validate(min_length = 1)]
    pub product_id: String,
    #[validate(min_length = 1)]
    pub user_id: String,
    pub rating: i32,
    #[validate(max_length = 255)]
    pub title: Option<String>,
    #[validate(max_length = 1000)]
    pub comment: Option<String>,
}
