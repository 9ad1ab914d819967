//! Blocking HTTP plumbing shared by the appliance and publishing adapters.

use crate::{CoreResult, RecorderError};

use std::time::Duration;

use ureq::{Agent, Body, http::Response, http::StatusCode};

/// Build an agent with a fixed global timeout and no proxy.
///
/// Ambient proxy variables are ignored: both the appliance and the
/// publishing service are reached directly. Non-2xx statuses are returned
/// as responses so the caller can report the exact code.
pub(crate) fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .proxy(None)
        .build()
        .into()
}

/// Read a response body, failing on anything but `200 OK`.
#[track_caller]
pub(crate) fn read_ok_body(endpoint: &str, mut response: Response<Body>) -> CoreResult<String> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(RecorderError::transport(
            endpoint,
            format!("HTTP {} error", status.as_u16()),
        ));
    }

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| RecorderError::transport(endpoint, format!("Failed to read body: {}", e)))?;

    Ok(body.trim().to_string())
}
