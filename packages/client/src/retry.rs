//! HTTP retry helper for transient errors.
//!
//! Every upstream call goes through [`send_json`] instead of calling
//! `reqwest::RequestBuilder::send()` directly, so each request gets
//! automatic retry with exponential backoff for transient failures
//! (timeouts, connection resets, server errors, rate limiting).
//!
//! The retry budget is deliberately small: narration requests sit on an
//! interactive path, and with backoff delays of 2s, 4s, 8s the worst case
//! stays under a minute including per-request timeouts.

use std::time::Duration;

use crate::ClientError;

/// Maximum number of retry attempts for transient HTTP errors.
const MAX_RETRIES: u32 = 3;

/// Sends an HTTP request and parses the response body as JSON.
///
/// The `build_request` closure is called on each attempt to construct a
/// fresh [`reqwest::RequestBuilder`] (builders are consumed by `.send()`).
///
/// Retries connection errors, timeouts, HTTP 429, and HTTP 5xx up to
/// [`MAX_RETRIES`] times with exponential backoff. Does **not** retry
/// other HTTP 4xx — these are permanent.
///
/// # Errors
///
/// Returns [`ClientError`] if the request fails after all retries, the
/// server returns a non-retryable status code, or the response body
/// cannot be parsed as JSON.
#[allow(clippy::future_not_send)]
pub async fn send_json<F>(build_request: F) -> Result<serde_json::Value, ClientError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(1u64 << attempt); // 2s, 4s, 8s
            log::warn!("  retry {attempt}/{MAX_RETRIES} in {delay:?}...");
            tokio::time::sleep(delay).await;
        }

        match build_request().send().await {
            Err(e) => {
                if is_transient(&e) && attempt < MAX_RETRIES {
                    log::warn!("  transient error: {e}");
                    continue;
                }
                return Err(ClientError::Http(e));
            }
            Ok(response) => {
                let status = response.status();

                // 429 and 5xx are worth retrying; other 4xx are permanent.
                if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                    if attempt < MAX_RETRIES {
                        log::warn!("  HTTP {status}");
                        continue;
                    }
                    return Err(ClientError::Status { status });
                }
                if status.is_client_error() {
                    return Err(ClientError::Status { status });
                }

                let text = response.text().await.map_err(ClientError::Http)?;
                return serde_json::from_str(&text).map_err(ClientError::from);
            }
        }
    }

    // Every `continue` above is guarded by `attempt < MAX_RETRIES`, so the
    // final iteration always returns.
    unreachable!("send_json retry loop exited without returning")
}

/// Returns `true` if the error is likely transient and worth retrying.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_body() || e.is_decode() || e.is_request()
}
