//! Bounded waits for asynchronous replies.
//!
//! A wait that elapses is reported as [`EntropyError::Timeout`], never as a
//! result.

use crate::error::{EntropyError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Default reply wait in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Timeout configuration for a single wait
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Maximum duration to wait
    pub duration: Duration,
    /// Whether to log a warning when the wait elapses
    pub log_warnings: bool,
    /// Operation name for logging
    pub operation_name: String,
}

impl TimeoutConfig {
    pub fn new(duration: Duration, operation: impl Into<String>) -> Self {
        Self {
            duration,
            log_warnings: true,
            operation_name: operation.into(),
        }
    }
}

/// Awaits `future` for at most `config.duration`.
pub async fn with_timeout<T, F>(config: TimeoutConfig, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout(config.duration, future).await {
        Ok(result) => {
            debug!(operation = %config.operation_name, "completed within deadline");
            result
        }
        Err(_) => {
            let millis = config.duration.as_millis().min(u64::MAX as u128) as u64;
            if config.log_warnings {
                warn!(
                    operation = %config.operation_name,
                    millis,
                    "timed out waiting for reply"
                );
            }
            Err(EntropyError::Timeout { millis })
        }
    }
}
