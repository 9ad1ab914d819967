use std::fmt;

/// Named commands understood by the appliance's command endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplianceCommand {
    /// Query the status line.
    GetStatus,
    /// Start a local recording.
    StartRecording,
    /// Start streaming to the configured RTMP target and recording.
    StartStreamingAndRecording,
    /// Stop both streaming and recording.
    StopStreamingAndRecording,
    /// Configure the outbound stream target.
    SetRtmp {
        /// Scheme argument, sent as-is.
        scheme: String,
        /// Host and path of the stream target.
        target: String,
    },
}

impl fmt::Display for ApplianceCommand {
    /// Renders the value of the `command` query parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplianceCommand::GetStatus => f.write_str("GetStatus"),
            ApplianceCommand::StartRecording => f.write_str("StartRecording"),
            ApplianceCommand::StartStreamingAndRecording => {
                f.write_str("StartStreamingAndRecording")
            }
            ApplianceCommand::StopStreamingAndRecording => f.write_str("StopStreamingAndRecording"),
            ApplianceCommand::SetRtmp { scheme, target } => {
                write!(f, "SetRTMP,{},{}", scheme, target)
            }
        }
    }
}
