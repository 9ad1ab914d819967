use std::fmt;

/// Recording state reported by the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordState {
    /// Recording is not enabled on the appliance.
    Disabled,
    /// Idle and able to start a recording.
    Ready,
    /// A recording is in progress.
    On,
    /// Any other appliance-defined state, upper-cased.
    Other(String),
}

impl RecordState {
    /// Interpret a raw state tag, ignoring letter case.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_uppercase();
        match tag.as_str() {
            "DISABLED" => RecordState::Disabled,
            "READY" => RecordState::Ready,
            "ON" => RecordState::On,
            _ => RecordState::Other(tag),
        }
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordState::Disabled => f.write_str("DISABLED"),
            RecordState::Ready => f.write_str("READY"),
            RecordState::On => f.write_str("ON"),
            RecordState::Other(tag) => f.write_str(tag),
        }
    }
}

/// Structured view of one appliance status line.
///
/// Derived fresh from every status query and never cached across actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    /// Recording state.
    pub record_state: RecordState,
    /// Stream mode tag, as reported.
    pub stream_mode: String,
    /// Stream state tag, as reported.
    pub stream_state: String,
    /// Free-form device name.
    pub device_name: String,
}
