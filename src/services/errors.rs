use crate::db::StorageError;
use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::time::Duration;

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Failures of the review operations. The variant decides the HTTP status;
/// the fields only feed the message.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("invalid rating {rating}: must be between 1 and 5")]
    InvalidRating { rating: i32 },

    #[error("invalid {field} {value:?}: expected a non-negative integer")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("review for product {product_id} by user {user_id} already exists")]
    DuplicateReview { product_id: String, user_id: String },

    #[error("{operation} failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("{operation} cancelled after {timeout:?}")]
    Cancelled {
        operation: &'static str,
        timeout: Duration,
    },

    // Reserved: neither listing nor creation produces it.
    #[error("review not found")]
    NotFound,
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRating { .. } | Self::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateReview { .. } => StatusCode::CONFLICT,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Cancelled { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::InvalidRating { .. } => "Invalid rating (must be 1-5)".to_string(),
            Self::InvalidIdentifier { .. } | Self::NotFound => self.to_string(),
            Self::DuplicateReview { .. } => "Review already exists".to_string(),
            Self::Storage { .. } => "Internal server error".to_string(),
            Self::Cancelled { .. } => "Request timed out".to_string(),
        };

        JsonResponse::<()>::build().to_response(self.status_code(), &message)
    }
}
