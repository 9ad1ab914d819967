use lecture_recorder_core::{CoarseStatus, ControlPlane, CoreResult, profile_catalog};
use tracing::{info, instrument};

/// Control-plane collaborator that records reports in the log.
///
/// Stands in for the remote control-plane connection, which is managed
/// outside this agent.
pub struct LoggingControlPlane {
    recorder_name: String,
}

impl LoggingControlPlane {
    /// Create a collaborator for the recorder `recorder_name`.
    pub fn new(recorder_name: &str) -> Self {
        Self {
            recorder_name: recorder_name.to_string(),
        }
    }
}

impl ControlPlane for LoggingControlPlane {
    #[instrument(skip(self, extra), fields(recorder = %self.recorder_name))]
    fn report_status(&self, status: CoarseStatus, extra: &[(&str, &str)]) -> CoreResult<()> {
        info!(status = %status, extra = ?extra, "Status reported");
        Ok(())
    }

    #[instrument(skip(self), fields(recorder = %self.recorder_name))]
    fn refresh_capabilities(&self) -> CoreResult<()> {
        let profiles: Vec<&str> = profile_catalog().into_keys().collect();
        info!(profiles = ?profiles, "Capabilities advertised");
        Ok(())
    }
}
