use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::application::ports::RepositoryError;

const MAX_ATTEMPTS: u32 = 6;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Connects to Postgres, retrying with exponential backoff so the server
/// survives the database coming up slightly later than it does.
#[tracing::instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let mut backoff = INITIAL_BACKOFF;

    for attempt in 1..=MAX_ATTEMPTS {
        let connect = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url);
        match connect.await {
            Ok(pool) => {
                tracing::info!(attempt, "connected to PostgreSQL");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                tracing::warn!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %e,
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => return Err(RepositoryError::ConnectionFailed(e.to_string())),
        }
    }

    unreachable!("loop returns on the final attempt")
}
