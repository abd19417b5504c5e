//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user, returning the assigned id
    async fn create(&self, user: &User) -> RepoResult<UserId>;

    /// Update profile fields (leetcode username, active flag)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Stamp last_login for a successful login
    async fn record_login(&self, id: UserId) -> RepoResult<()>;

    /// Grant or revoke the admin flag
    async fn set_admin(&self, id: UserId, is_admin: bool) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()>;

    /// Delete a user; owned rows (progress, schedule, enrollments) cascade
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Total number of accounts
    async fn count(&self) -> RepoResult<i64>;

    /// Number of active accounts
    async fn count_active(&self) -> RepoResult<i64>;

    /// Number of accounts holding the admin flag
    async fn count_admins(&self) -> RepoResult<i64>;
}
