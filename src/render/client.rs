//! HTTP plumbing for the render service.
//!
//! Provides client creation with timeouts and size-limited downloads.

use reqwest::blocking::{Client, Response};
use std::io::Read;
use std::time::Duration;

use super::RenderError;
use crate::config::RenderConfig;

const USER_AGENT: &str = concat!("fieldobs/", env!("CARGO_PKG_VERSION"));

/// Create an HTTP client with the configured timeouts.
/// - connect_timeout: Maximum time to establish a TCP connection
/// - timeout: Maximum time for the entire request (connection + data transfer)
pub(crate) fn create_http_client(config: &RenderConfig) -> Result<Client, RenderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(RenderError::Client)
}

/// HTTP status code and reason of a failed response, or `None` on success.
pub(crate) fn failed_status(response: &Response) -> Option<(u16, String)> {
    let status = response.status();
    if status.is_success() {
        return None;
    }
    let reason = status.canonical_reason().unwrap_or("Unknown error").to_string();
    Some((status.as_u16(), reason))
}

/// Read a response body, failing once it grows past `max_size`.
/// Checks Content-Length header first, then enforces limit during streaming.
pub(crate) fn read_with_limit(response: Response, max_size: u64) -> Result<Vec<u8>, RenderError> {
    if let Some(content_length) = response.content_length() {
        if content_length > max_size {
            return Err(RenderError::TooLarge { limit: max_size });
        }
    }

    let mut bytes = Vec::new();
    let mut reader = response;
    let mut total_read: u64 = 0;
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer).map_err(RenderError::Body)?;
        if n == 0 {
            break;
        }
        total_read += n as u64;
        if total_read > max_size {
            return Err(RenderError::TooLarge { limit: max_size });
        }
        bytes.extend_from_slice(&buffer[..n]);
    }

    Ok(bytes)
}

/// Join the API root and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
