use super::errors::{Result, ReviewError};
use crate::models::{self, Key};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn validate_rating(rating: i32) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ReviewError::InvalidRating { rating });
    }
    Ok(())
}

pub fn decode_identifier(field: &'static str, value: &str) -> Result<Key> {
    models::decode(value).map_err(|_| ReviewError::InvalidIdentifier {
        field,
        value: value.to_string(),
    })
}

/// Decode both identifiers. The product is checked first, so a request with
/// two bad identifiers always reports `product_id`.
pub fn validate_identifiers(product_id: &str, user_id: &str) -> Result<(Key, Key)> {
    let product = decode_identifier("product_id", product_id)?;
    let user = decode_identifier("user_id", user_id)?;
    Ok((product, user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for rating in -3..=9 {
            let accepted = validate_rating(rating).is_ok();
            assert_eq!(accepted, (1..=5).contains(&rating), "rating {}", rating);
        }
        assert!(validate_rating(i32::MIN).is_err());
        assert!(validate_rating(i32::MAX).is_err());
    }

    #[test]
    fn test_rating_error_carries_value() {
        match validate_rating(6) {
            Err(ReviewError::InvalidRating { rating }) => assert_eq!(rating, 6),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_identifiers_decoded() {
        let (product, user) = validate_identifiers("10", "3").unwrap();
        assert_eq!(product.value(), 10);
        assert_eq!(user.value(), 3);
    }

    #[test]
    fn test_product_checked_before_user() {
        match validate_identifiers("abc", "xyz") {
            Err(ReviewError::InvalidIdentifier { field, value }) => {
                assert_eq!(field, "product_id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_user_reported() {
        match validate_identifiers("10", "") {
            Err(ReviewError::InvalidIdentifier { field, .. }) => assert_eq!(field, "user_id"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
