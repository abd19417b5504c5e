//! Embedded schema migrations
//!
//! Reversible migrations compiled into the binary with [`sqlx::migrate!`].
//! Applied versions are recorded in the `_sqlx_migrations` history table,
//! which is what guards against a step running twice; the steps themselves
//! are not idempotent.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// All migrations under `crates/leetrack-db/migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration in version order
///
/// # Errors
/// Returns the underlying migration error unwrapped; a failed constraint
/// tighten (e.g. NOT NULL over remaining NULLs) surfaces here for the
/// operator to resolve.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    info!("applying pending migrations");
    MIGRATOR.run(pool).await?;
    info!("migrations up to date");
    Ok(())
}

/// Revert applied migrations down to (but not including) `target_version`
///
/// Pass `0` to revert everything. Down migrations are lossy by design:
/// reverting the admin-flag step discards the flag for every account.
///
/// # Errors
/// Returns the underlying migration error unwrapped.
pub async fn revert_migrations(pool: &PgPool, target_version: i64) -> Result<(), MigrateError> {
    info!(target_version, "reverting migrations");
    MIGRATOR.undo(pool, target_version).await?;
    info!(target_version, "migrations reverted");
    Ok(())
}
