//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended). The
//! plaintext is never stored or logged; only the PHC-encoded hash leaves
//! this module.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use leetrack_core::entities::User;

use crate::error::AppError;

/// Upper bound on accepted plaintext size, guarding the hash function
/// against oversized inputs.
pub const MAX_PASSWORD_BYTES: usize = 512;

/// Hash a password using Argon2id with a fresh random salt
///
/// Two calls with the same plaintext produce different hashes; both verify.
///
/// # Errors
/// Returns a validation error for empty or oversized plaintext, or an
/// internal error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::Validation(
            "Password must not be empty".to_string(),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::Validation(format!(
            "Password must not exceed {MAX_PASSWORD_BYTES} bytes"
        )));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// A plain mismatch returns `Ok(false)`. A stored hash that cannot be
/// parsed, or that names an unsupported algorithm or version, fails with
/// [`AppError::CredentialFormat`] instead of surfacing a decoding fault.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::CredentialFormat(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(e) => Err(AppError::CredentialFormat(e.to_string())),
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if the stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Credential operations on the user entity
///
/// Both operations touch in-memory state only; persisting the updated hash
/// is the caller's responsibility.
pub trait Credentials {
    /// Hash `plaintext` and overwrite the stored credential field
    ///
    /// # Errors
    /// Returns a validation error for empty or oversized plaintext.
    fn set_password(&mut self, plaintext: &str) -> Result<(), AppError>;

    /// Check `plaintext` against the stored credential field
    ///
    /// # Errors
    /// Returns `AppError::CredentialFormat` if the stored hash is malformed.
    fn check_password(&self, plaintext: &str) -> Result<bool, AppError>;
}

impl Credentials for User {
    fn set_password(&mut self, plaintext: &str) -> Result<(), AppError> {
        self.password_hash = hash_password(plaintext)?;
        Ok(())
    }

    fn check_password(&self, plaintext: &str) -> Result<bool, AppError> {
        verify_password(plaintext, &self.password_hash)
    }
}

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - Between 8 and 128 characters
/// - Contains at least one letter
/// - Contains at least one digit
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if password.chars().count() > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters long".to_string(),
        ));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::Validation(
            "Password must contain at least one letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}
