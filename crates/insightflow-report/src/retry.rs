//! Retry with exponential back-off and jitter for the completion call.
//!
//! [`retry_with_backoff`] wraps the completion request and retries on
//! transient errors: network failures, timeouts, 5xx, 429, and malformed
//! responses. Other API rejections (bad key, unknown model) are returned
//! immediately; retrying cannot fix them and only delays the fallback.

use std::future::Future;
use std::time::Duration;

use crate::error::ReportError;

/// Attempt and back-off bounds for one generation request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    /// Total attempts, including the first. Clamped to at least 1.
    pub max_attempts: u32,
    pub backoff_min_ms: u64,
    pub backoff_max_ms: u64,
}

/// Returns `true` for errors that are worth retrying after a back-off delay.
pub(crate) fn is_retriable(err: &ReportError) -> bool {
    match err {
        ReportError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        ReportError::Api { status, .. } => *status >= 500 || *status == 429,
        // A garbled body is usually an upstream hiccup; a fresh attempt may
        // come back well-formed.
        ReportError::MalformedResponse(_) => true,
        ReportError::EmptyRecord => false,
    }
}

/// Runs `operation` up to `policy.max_attempts` times.
///
/// Back-off before attempt `n + 1` is `backoff_min_ms * 2^(n-1)`, capped at
/// `backoff_max_ms`, with ±25% jitter (the cap applies after jitter too).
/// Non-retriable errors are returned immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, ReportError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ReportError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                let computed = policy
                    .backoff_min_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(policy.backoff_max_ms);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = ((capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64)
                    .min(policy.backoff_max_ms);
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms,
                    error = %err,
                    "completion request failed — retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
        }
    }
}
