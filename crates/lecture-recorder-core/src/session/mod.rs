mod metadata;
mod recording_session;
mod request;

pub use {
    metadata::{RecorderIdentity, SessionMetadata, session_code},
    recording_session::RecordingSession,
    request::{Params, RecordingRequest, live_requested},
};
