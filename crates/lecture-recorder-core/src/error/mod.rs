use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder agent errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// Action tag not recognized by the dispatcher.
    #[error("Unsupported action: {action} {location}")]
    UnsupportedAction {
        /// The tag that was received.
        action: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Appliance status line did not match the expected shape.
    #[error("Malformed appliance status: {raw:?} {location}")]
    MalformedStatus {
        /// The raw status line.
        raw: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Status line pattern failed to compile.
    #[error("Invalid status pattern: {reason} {location}")]
    StatusPattern {
        /// Compiler error message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// HTTP call to the appliance or the publishing service failed.
    #[error("Transport error on {endpoint}: {reason} {location}")]
    Transport {
        /// Endpoint that was called, without credentials.
        endpoint: String,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Publishing service answered with a body of an unexpected shape.
    #[error("Invalid response from {endpoint}: {reason} {location}")]
    InvalidResponse {
        /// Endpoint that was called.
        endpoint: String,
        /// Description of the mismatch.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Requested action does not fit the appliance state. Logged, never returned.
    #[error("Invalid appliance state for {action}: {reason} {location}")]
    InvalidState {
        /// Action that was refused.
        action: String,
        /// Operator-facing explanation.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Publishing service refused the uploaded artifact. Logged, never returned.
    #[error("Upload rejected for {code}: {reason} {location}")]
    UploadRejected {
        /// Session code of the rejected upload.
        code: String,
        /// Error message reported by the service.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Filesystem error during artifact handoff.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// JSON serialization failed.
    #[error("Serialization error: {source} {location}")]
    Serialization {
        /// The underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl RecorderError {
    /// Build an `InvalidState` error for logging.
    #[track_caller]
    pub fn invalid_state(action: &str, reason: impl Into<String>) -> Self {
        RecorderError::InvalidState {
            action: action.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build a `Transport` error.
    #[track_caller]
    pub fn transport(endpoint: &str, reason: impl Into<String>) -> Self {
        RecorderError::Transport {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for RecorderError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        RecorderError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RecorderError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        RecorderError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
