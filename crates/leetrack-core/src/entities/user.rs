//! User entity - a registered account

use chrono::{DateTime, Utc};
use validator::ValidateEmail;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Maximum stored length of an email address
pub const MAX_EMAIL_LEN: usize = 100;

/// Maximum stored length of a LeetCode username
pub const MAX_LEETCODE_USERNAME_LEN: usize = 50;

/// User account entity
///
/// `password_hash` only ever holds the derived credential, never plaintext.
/// Related rows (question progress, review schedule, enrollments) live in
/// their own tables and are looked up by `id`; there is no in-memory
/// navigation between them and the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub leetcode_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_admin: bool,
}

impl User {
    /// Create a new User with an unassigned id
    ///
    /// The storage layer assigns the real id on insert. New accounts start
    /// active and without the admin flag.
    pub fn new(email: String, password_hash: String, leetcode_username: Option<String>) -> Self {
        Self {
            id: UserId::unassigned(),
            email,
            password_hash,
            leetcode_username,
            created_at: Utc::now(),
            last_login: None,
            is_active: true,
            is_admin: false,
        }
    }

    /// Validate field-level constraints before persisting
    ///
    /// # Errors
    /// Returns a validation error if the email is malformed or a field
    /// exceeds its column length.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.is_empty() || self.email.len() > MAX_EMAIL_LEN {
            return Err(DomainError::InvalidEmail);
        }
        if !self.email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }
        if let Some(username) = &self.leetcode_username {
            if username.is_empty() || username.len() > MAX_LEETCODE_USERNAME_LEN {
                return Err(DomainError::ValidationError(format!(
                    "leetcode username must be 1-{MAX_LEETCODE_USERNAME_LEN} characters"
                )));
            }
        }
        Ok(())
    }

    /// Stamp a successful login
    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    /// Update the linked LeetCode username
    pub fn set_leetcode_username(&mut self, username: Option<String>) {
        self.leetcode_username = username;
    }

    /// Grant or revoke the admin flag
    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }

    /// Soft-disable the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Re-enable a soft-disabled account
    pub fn reactivate(&mut self) {
        self.is_active = true;
    }
}
