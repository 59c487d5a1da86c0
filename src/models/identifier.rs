//! Conversion between the external string identifiers used on the wire and
//! the numeric keys used for storage lookups.

use std::fmt;
use std::str::FromStr;

/// Numeric storage key of a product, user or review.
///
/// Always non-negative; constructed through [`decode`] or [`Key::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(i64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier {0:?} is not a non-negative integer")]
    NotNumeric(String),
    #[error("identifier {0:?} is out of range")]
    OutOfRange(String),
    #[error("key {0} is negative")]
    Negative(i64),
}

impl Key {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Key {
    type Error = IdentifierError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(IdentifierError::Negative(value));
        }
        Ok(Key(value))
    }
}

impl From<Key> for i64 {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl FromStr for Key {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an external identifier. Only plain ASCII digits are accepted: no sign,
/// no surrounding whitespace.
pub fn decode(s: &str) -> Result<Key, IdentifierError> {
    if s.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierError::NotNumeric(s.to_string()));
    }

    s.parse::<i64>()
        .map(Key)
        .map_err(|_| IdentifierError::OutOfRange(s.to_string()))
}

pub fn encode(key: Key) -> String {
    key.0.to_string()
}
