//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// `created_at` and `is_active` are nullable columns with server defaults;
/// the mapper treats NULL as the default value.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
    pub leetcode_username: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub is_admin: bool,
}

impl UserModel {
    /// Check if the account is soft-disabled
    #[inline]
    pub fn is_disabled(&self) -> bool {
        !self.is_active.unwrap_or(true)
    }
}
