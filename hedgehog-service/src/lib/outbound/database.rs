use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Run `operation` until it succeeds or `attempts` calls have failed.
///
/// The delay starts at `initial_delay` and doubles after each failure. The
/// last error is returned once attempts are exhausted.
pub async fn retry_with_backoff<T, E, F, Fut>(
    attempts: u32,
    initial_delay: Duration,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let attempts = attempts.max(1);
    let mut delay = initial_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => return Err(e),
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
        }
    }
}

/// Build the connection pool, waiting for the database to accept connections.
pub async fn connect_with_retry(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections);

    let pool = retry_with_backoff(
        config.connect_attempts,
        Duration::from_millis(config.connect_backoff_ms),
        || options.clone().connect(&config.url),
    )
    .await
    .with_context(|| {
        format!(
            "database unreachable after {} attempts",
            config.connect_attempts
        )
    })?;

    tracing::info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;

    use super::*;

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let calls = AtomicU32::new(0);

        let result: Result<u32, String> = retry_with_backoff(5, Duration::from_millis(1), || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if call < 3 {
                    Err(format!("attempt {} failed", call))
                } else {
                    Ok(call)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);

        let result: Result<(), String> = retry_with_backoff(4, Duration::from_millis(1), || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("attempt {} failed", call)) }
        })
        .await;

        assert_eq!(result, Err("attempt 4 failed".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_always_makes_one_attempt() {
        let calls = AtomicU32::new(0);

        let result: Result<(), String> = retry_with_backoff(0, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("down".to_string()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
