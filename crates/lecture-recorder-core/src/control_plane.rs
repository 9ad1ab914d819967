use crate::CoreResult;

use std::fmt;

/// Coarse recorder status reported to the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseStatus {
    /// An action is being processed.
    Initializing,
    /// A session is (or should be) recording.
    Recording,
    /// Idle.
    Ready,
}

impl fmt::Display for CoarseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoarseStatus::Initializing => f.write_str("initializing"),
            CoarseStatus::Recording => f.write_str("recording"),
            CoarseStatus::Ready => f.write_str("ready"),
        }
    }
}

/// Remote scheduling/control plane, as seen by the dispatcher.
///
/// The connection lifecycle behind it (registration, long polling) lives
/// outside this crate.
pub trait ControlPlane: Send {
    /// Report the recorder status with optional extra key/value pairs.
    fn report_status(&self, status: CoarseStatus, extra: &[(&str, &str)]) -> CoreResult<()>;

    /// Re-advertise this recorder's capabilities.
    fn refresh_capabilities(&self) -> CoreResult<()>;
}
