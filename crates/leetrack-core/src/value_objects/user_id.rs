//! UserId - database-assigned integer identifier for users
//!
//! The primary key is assigned by the storage layer (a serial column), so a
//! freshly constructed `User` carries the unassigned sentinel until the
//! repository returns the generated key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a user row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Create a UserId from a raw i32 value
    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Sentinel for a user that has not been persisted yet
    #[inline]
    pub const fn unassigned() -> Self {
        Self(0)
    }

    /// Get the inner i32 value
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Check whether the id is still the unassigned sentinel
    #[inline]
    pub const fn is_unassigned(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ParseUserIdError> {
        s.parse::<i32>()
            .map(UserId)
            .map_err(|_| ParseUserIdError::InvalidFormat)
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseUserIdError {
    #[error("invalid user id format")]
    InvalidFormat,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = ParseUserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_into_inner() {
        let id = UserId::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_unassigned() {
        assert!(UserId::unassigned().is_unassigned());
        assert!(!UserId::new(1).is_unassigned());
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(UserId::parse("123").unwrap(), UserId::new(123));
        assert_eq!("7".parse::<UserId>().unwrap(), UserId::new(7));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            UserId::parse("not-a-number"),
            Err(ParseUserIdError::InvalidFormat)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::new(99).to_string(), "99");
    }
}
