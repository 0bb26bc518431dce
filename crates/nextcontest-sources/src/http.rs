//! Shared HTTP plumbing for the adapters.
//!
//! All adapters share one [`reqwest::Client`] with an explicit timeout; a
//! timed-out request is treated identically to a failed one. Responses are
//! mapped to [`SourceError`]s by status class so the run manifest can tell
//! "platform down" from "platform answering garbage".

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::trace;

use nextcontest_core::Platform;

use crate::error::{SourceError, SourceResult};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("nextcontest/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by all sources.
pub fn build_client(timeout: Duration) -> SourceResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SourceError::network(format!("failed to create HTTP client: {e}")))
}

/// Sends a request and returns the body on a successful status.
///
/// Any transport error or non-success status becomes a [`SourceError`]
/// tagged with the platform.
pub async fn fetch_text(request: RequestBuilder, platform: Platform) -> SourceResult<String> {
    let response = request
        .send()
        .await
        .map_err(|e| classify_transport(&e, platform).with_source(e))?;

    let response = check_status(response, platform).await?;

    response.text().await.map_err(|e| {
        SourceError::network(format!("failed to read response body: {e}"))
            .with_platform(platform)
            .with_source(e)
    })
}

/// Classifies a reqwest transport error.
fn classify_transport(error: &reqwest::Error, platform: Platform) -> SourceError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else {
        format!("request failed: {error}")
    };
    SourceError::network(message).with_platform(platform)
}

/// Maps a non-success HTTP status to a [`SourceError`].
async fn check_status(response: Response, platform: Platform) -> SourceResult<Response> {
    let status = response.status();
    trace!(platform = %platform, status = %status, "received response");

    if status.is_success() {
        return Ok(response);
    }

    let err = match status {
        StatusCode::NOT_FOUND => SourceError::not_found("resource not found"),
        StatusCode::TOO_MANY_REQUESTS => SourceError::rate_limited("too many requests"),
        s if s.is_server_error() => SourceError::server(format!("server error ({s})")),
        s => SourceError::invalid_response(format!("unexpected status {s}")),
    };

    Err(err.with_platform(platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_timeout() {
        assert!(build_client(DEFAULT_TIMEOUT).is_ok());
        assert!(build_client(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("nextcontest/"));
    }
}
