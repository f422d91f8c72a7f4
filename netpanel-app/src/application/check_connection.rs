use crate::config::AppConfig;
use crate::domain::ConnectionReport;
use chrono::Utc;
use netpanel_errors::AppError;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// The check a page performs to find out whether the server is reachable.
/// The first `fail_first` attempts are refused so the error panel can be
/// exercised against a live server.
pub struct CheckConnection {
    attempts: AtomicU32,
    fail_first: u32,
    delay: Duration,
}

impl CheckConnection {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            attempts: AtomicU32::new(0),
            fail_first: config.fail_first,
            delay: config.check_delay,
        }
    }

    pub async fn execute(&self) -> Result<ConnectionReport, AppError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if attempt <= self.fail_first {
            tracing::warn!(attempt, fail_first = self.fail_first, "Refusing connection check");
            return Err(AppError::ConnectionFailed(format!(
                "Upstream refused the connection (attempt {} of {})",
                attempt, self.fail_first
            )));
        }

        tracing::info!(attempt, "Connection check passed");
        Ok(ConnectionReport::new(Utc::now(), attempt))
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn failures_remaining(&self) -> u32 {
        self.fail_first.saturating_sub(self.attempts())
    }
}

// Compiled with the `ssr` feature only; `cargo test --workspace` turns it on
// through netpanel-api, or run `cargo test -p netpanel-app --features ssr`.
#[cfg(test)]
mod tests {
    use super::*;

    fn check(fail_first: u32) -> CheckConnection {
        CheckConnection::new(&AppConfig {
            fail_first,
            check_delay: Duration::ZERO,
        })
    }

    #[tokio::test]
    async fn test_succeeds_without_configured_failures() {
        let check = check(0);
        let report = check.execute().await.unwrap();
        assert_eq!(report.attempt, 1);
    }

    #[tokio::test]
    async fn test_fails_configured_number_of_times() {
        let check = check(2);

        for _ in 0..2 {
            match check.execute().await {
                Err(AppError::ConnectionFailed(detail)) => {
                    assert!(detail.starts_with("Upstream refused the connection"))
                }
                other => panic!("expected a refused connection, got {:?}", other),
            }
        }

        let report = check.execute().await.unwrap();
        assert_eq!(report.attempt, 3);
        assert_eq!(check.execute().await.unwrap().attempt, 4);
        assert_eq!(check.attempts(), 4);
    }

    #[tokio::test]
    async fn test_reading_counters_does_not_consume_failures() {
        let check = check(1);
        assert_eq!(check.failures_remaining(), 1);
        assert_eq!(check.attempts(), 0);
        assert_eq!(check.failures_remaining(), 1);

        assert!(check.execute().await.is_err());
        assert_eq!(check.failures_remaining(), 0);
        assert!(check.execute().await.is_ok());
        assert_eq!(check.failures_remaining(), 0);
    }
}
