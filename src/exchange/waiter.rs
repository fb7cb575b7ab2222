use std::time::Duration;

use serde_json::Value;

use crate::error::{BobMcpError, Result};
use crate::exchange::{extract_result, reaper, ExchangePaths};

/// Default poll interval between lock checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default maximum poll attempts (150 x 2s = 5 minutes).
pub const MAX_ATTEMPTS: u32 = 150;

/// Polls the exchange directory until the responder clears the lock
/// marker, then reads the response artifact.
///
/// The lock's absence is the only completion signal. The response file
/// existing on its own proves nothing: the responder may write it
/// before removing the lock, and the waiter must not read a
/// half-written document.
pub struct Waiter {
    paths: ExchangePaths,
    interval: Duration,
    max_attempts: u32,
}

impl Waiter {
    pub fn new(paths: ExchangePaths) -> Self {
        Self::with_timing(paths, POLL_INTERVAL, MAX_ATTEMPTS)
    }

    /// Custom poll timing, used by tests to avoid multi-minute waits.
    pub fn with_timing(paths: ExchangePaths, interval: Duration, max_attempts: u32) -> Self {
        Self {
            paths,
            interval,
            max_attempts,
        }
    }

    /// Block (cooperatively) until a response is available or the
    /// attempt budget runs out.
    ///
    /// A read or parse failure after the lock clears is transient: the
    /// responder may still be flushing the response file, so the tick is
    /// treated as "not ready yet" rather than an error. On timeout the
    /// request and lock artifacts are left in place so a stuck exchange
    /// stays inspectable.
    pub async fn wait(&self) -> Result<String> {
        for _ in 0..self.max_attempts {
            if !self.paths.lock().exists() {
                if let Some(result) = self.try_read_response() {
                    reaper::reap(&self.paths);
                    tracing::info!("response received from Bob");
                    return Ok(result);
                }
            }
            tokio::time::sleep(self.interval).await;
        }

        Err(BobMcpError::ResponderTimeout {
            timeout_secs: self.interval.as_secs() * u64::from(self.max_attempts),
        })
    }

    fn try_read_response(&self) -> Option<String> {
        let contents = std::fs::read_to_string(self.paths.response()).ok()?;
        let response: Value = serde_json::from_str(&contents).ok()?;
        Some(extract_result(&response))
    }
}
