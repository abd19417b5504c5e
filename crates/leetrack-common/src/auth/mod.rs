//! Credential hashing and verification

mod password;

pub use password::{
    hash_password, validate_password_strength, verify_password, Credentials, PasswordService,
    MAX_PASSWORD_BYTES,
};
