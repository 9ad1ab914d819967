use crate::session::{RecordingRequest, SessionMetadata};

/// In-memory record of the current session and its queued follow-up.
///
/// One instance per process, owned by the controller. Nothing is persisted:
/// after a restart the record is empty even if the appliance is still
/// recording. The controller then synthesizes default metadata at stop
/// time, and a start received meanwhile is queued without metadata refresh.
#[derive(Debug, Default)]
pub struct RecordingSession {
    /// Metadata of the session currently recording.
    pub active_metadata: Option<SessionMetadata>,
    /// Start request received while a session was active.
    pub queued_request: Option<RecordingRequest>,
    /// Request that produced `active_metadata`.
    pub pending_start_request: Option<RecordingRequest>,
}

impl RecordingSession {
    /// Record a freshly started session, replacing any previous one.
    pub fn begin(&mut self, request: RecordingRequest, metadata: SessionMetadata) {
        self.active_metadata = Some(metadata);
        self.pending_start_request = Some(request);
    }

    /// Drop the active session, keeping any queued follow-up.
    pub fn end(&mut self) {
        self.active_metadata = None;
        self.pending_start_request = None;
    }
}
