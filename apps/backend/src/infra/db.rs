use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{info, warn};

use crate::config::db::{validate_db_url, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 3;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

fn connect_options(url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_string());
    // Every pooled connection to sqlite::memory: is its own database.
    if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
        opts.max_connections(1).min_connections(1);
    }
    opts.connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opts
}

/// Open a connection, retrying a few times while the database comes up.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, url: &str) -> Result<DatabaseConnection, AppError> {
    validate_db_url(profile, url)?;

    let mut last_error: Option<DbErr> = None;
    for attempt in 1..=CONNECT_ATTEMPTS {
        match Database::connect(connect_options(url)).await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) => {
                if attempt < CONNECT_ATTEMPTS {
                    warn!(
                        attempt,
                        max_attempts = CONNECT_ATTEMPTS,
                        interval_ms = CONNECT_RETRY_INTERVAL_MS,
                        error = %e,
                        "connection_retry=failed"
                    );
                    tokio::time::sleep(Duration::from_millis(CONNECT_RETRY_INTERVAL_MS)).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(e) => AppError::from(e),
        None => AppError::internal("no connection attempt was made"),
    })
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
