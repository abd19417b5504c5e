//! Tests for the add-is_admin migration
//!
//! Verifies against a live database that the migration:
//! 1. Adds the column nullable, backfills existing rows to FALSE, then
//!    tightens to NOT NULL
//! 2. Is reversible (down drops the column)
//! 3. Leaves no NULLs behind after an up/down/up round trip
//!
//! Requires a DEDICATED test database (rows in `users` are truncated).
//! Skipped when DATABASE_URL is not set. The whole scenario runs as one
//! test because the steps mutate shared schema state.

use sqlx::PgPool;

use leetrack_db::migrations::{revert_migrations, run_migrations};

/// Version of the baseline schema migration
const BASELINE_VERSION: i64 = 20250601000000;

async fn get_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    PgPool::connect(&database_url).await.ok()
}

/// Check whether users.is_admin exists, and if so whether it is nullable
async fn is_admin_column(pool: &PgPool) -> Option<bool> {
    let nullable: Option<String> = sqlx::query_scalar(
        r"
        SELECT is_nullable FROM information_schema.columns
        WHERE table_name = 'users' AND column_name = 'is_admin'
        ",
    )
    .fetch_optional(pool)
    .await
    .unwrap();

    nullable.map(|n| n == "YES")
}

#[tokio::test]
async fn test_add_is_admin_migration_roundtrip() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    // Bring the schema fully up, then step back to the pre-is_admin state
    run_migrations(&pool).await.unwrap();
    revert_migrations(&pool, BASELINE_VERSION).await.unwrap();
    assert_eq!(is_admin_column(&pool).await, None, "down should drop the column");

    // Three pre-existing rows that know nothing of the admin flag
    sqlx::query("TRUNCATE users CASCADE")
        .execute(&pool)
        .await
        .unwrap();
    for i in 0..3 {
        sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, '$argon2id$fake')")
            .bind(format!("migration_{i}@example.com"))
            .execute(&pool)
            .await
            .unwrap();
    }

    // Upgrade: add nullable, backfill, tighten
    run_migrations(&pool).await.unwrap();
    assert_eq!(
        is_admin_column(&pool).await,
        Some(false),
        "column should exist and be NOT NULL"
    );

    let backfilled: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_admin = FALSE")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(backfilled, 3, "every pre-existing row backfills to FALSE");

    let nulls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_admin IS NULL")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(nulls, 0);

    // The tightened constraint rejects explicit NULLs
    let result = sqlx::query(
        "INSERT INTO users (email, password_hash, is_admin) VALUES ('null_admin@example.com', '$argon2id$fake', NULL)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "NULL is_admin should violate the constraint");

    // Downgrade drops the column and its data
    revert_migrations(&pool, BASELINE_VERSION).await.unwrap();
    assert_eq!(is_admin_column(&pool).await, None);

    // Upgrade again: the same three rows backfill to FALSE once more
    run_migrations(&pool).await.unwrap();
    let backfilled: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_admin = FALSE")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(backfilled, 3);

    // Clean up
    sqlx::query("TRUNCATE users CASCADE")
        .execute(&pool)
        .await
        .unwrap();
}
