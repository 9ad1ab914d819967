//! Appliance status line decoding.
//!
//! The appliance answers `GetStatus` with a single line shaped like
//! `RECORD:<STATE>,STREAM:<MODE>,<STATE>,NAME:<name>`.

use crate::{CoreResult, RecorderError, status::DeviceStatus, status::RecordState};

use std::{panic::Location, sync::LazyLock};

use error_location::ErrorLocation;
use regex::Regex;
use tracing::debug;

static STATUS_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)RECORD:(?P<record_state>[A-Z]+),STREAM:(?P<stream_mode>[A-Z]+),(?P<stream_state>[A-Z]+),NAME:(?P<device_name>.+)$",
    )
});

/// Parse a raw appliance status line.
///
/// # Errors
///
/// Returns `MalformedStatus` if the line does not match the expected shape,
/// `StatusPattern` if the status pattern itself failed to compile.
/// No partial interpretation is attempted.
#[track_caller]
pub fn parse_status(raw: &str) -> CoreResult<DeviceStatus> {
    let line = raw.trim();

    let pattern = STATUS_RE
        .as_ref()
        .map_err(|e| RecorderError::StatusPattern {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let caps = pattern
        .captures(line)
        .ok_or_else(|| RecorderError::MalformedStatus {
            raw: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let status = DeviceStatus {
        record_state: RecordState::from_tag(&caps["record_state"]),
        stream_mode: caps["stream_mode"].to_string(),
        stream_state: caps["stream_state"].to_string(),
        device_name: caps["device_name"].to_string(),
    };

    debug!(
        record_state = %status.record_state,
        stream_mode = %status.stream_mode,
        stream_state = %status.stream_state,
        device_name = %status.device_name,
        "Appliance status parsed"
    );

    Ok(status)
}
