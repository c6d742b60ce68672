//! Polling until the Archivist has confirmed a freshly created resource.
//!
//! Assets and events are accepted asynchronously: a create returns while
//! `confirmation_status` is still `PENDING`. [`wait_for_confirmation`]
//! re-reads the resource with exponential backoff until it settles or the
//! configured time budget runs out.

use std::future::Future;
use std::time::Duration;

use archivist_types::ConfirmationStatus;
use tokio::time::Instant;

use crate::config::ConfirmConfig;
use crate::error::{SdkError, SdkResult};

/// Next backoff delay, clamped to [`ConfirmConfig::max_delay`]. Never
/// shorter than `current` or one millisecond.
pub fn next_delay(current: Duration, config: &ConfirmConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms)
        .max(current)
        .max(Duration::from_millis(1))
        .min(config.max_delay().max(Duration::from_millis(1)))
}

/// Re-read a resource via `read` until `status` reports it confirmed.
pub async fn wait_for_confirmation<T, F, Fut, S>(
    identity: &str,
    config: &ConfirmConfig,
    mut read: F,
    status: S,
) -> SdkResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SdkResult<T>>,
    S: Fn(&T) -> ConfirmationStatus,
{
    let started = Instant::now();
    let mut delay = config.initial_delay();
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let resource = read().await?;
        let current = status(&resource);
        if current.is_confirmed() {
            tracing::debug!(identity, attempt, "confirmed");
            return Ok(resource);
        }
        if current.is_failed() {
            return Err(SdkError::ConfirmationFailed { identity: identity.to_string() });
        }

        let elapsed = started.elapsed();
        if elapsed >= config.max_time() {
            return Err(SdkError::ConfirmationTimeout {
                identity: identity.to_string(),
                status: current.to_string(),
                waited_secs: elapsed.as_secs(),
            });
        }
        tracing::debug!(
            identity,
            attempt,
            status = %current,
            delay_ms = delay.as_millis() as u64,
            "waiting for confirmation",
        );
        tokio::time::sleep(delay.min(config.max_time() - elapsed)).await;
        delay = next_delay(delay, config);
    }
}
