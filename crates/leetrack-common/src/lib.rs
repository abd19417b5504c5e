//! # leetrack-common
//!
//! Shared utilities including configuration, error handling, credential
//! hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Credentials, PasswordService,
    MAX_PASSWORD_BYTES,
};
pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
