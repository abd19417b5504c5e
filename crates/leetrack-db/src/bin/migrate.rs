//! Schema migration runner
//!
//! Run with:
//! ```bash
//! cargo run -p leetrack-db --bin migrate               # apply pending migrations
//! cargo run -p leetrack-db --bin migrate down 20250601000000
//! ```
//!
//! `down <target-version>` reverts every migration newer than the target
//! (`down 0` reverts everything). Configuration is loaded from environment
//! variables; failures are surfaced to the operator without retry.

use leetrack_common::{try_init_tracing, AppConfig};
use leetrack_db::migrations::{revert_migrations, run_migrations};
use leetrack_db::pool::{create_pool, DatabaseConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Migration run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;
    info!(env = ?config.app.env, "Configuration loaded");

    let db_config = DatabaseConfig {
        url: config.database.url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("up") => {
            run_migrations(&pool).await?;
        }
        Some("down") => {
            let target_version = match args.get(1) {
                Some(raw) => raw.parse::<i64>()?,
                None => 0,
            };
            revert_migrations(&pool, target_version).await?;
        }
        Some(other) => {
            return Err(format!("unknown command '{other}' (expected 'up' or 'down <version>')").into());
        }
    }

    Ok(())
}
