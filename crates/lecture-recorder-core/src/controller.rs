//! Recording session controller.
//!
//! Interprets the appliance status, decides which commands to issue for a
//! start or stop request and owns the single [`RecordingSession`] record.
//! The appliance's reported state is authoritative; local fields only carry
//! metadata and the queued follow-up between actions.

use crate::{
    CoreResult, RecorderError,
    appliance::{Appliance, ApplianceCommand},
    handoff::{ArtifactLocator, Handoff},
    publishing::{Publisher, RTMP_SCHEME, StreamRoute},
    session::{RecorderIdentity, RecordingRequest, RecordingSession, SessionMetadata},
    status::{DeviceStatus, RecordState, parse_status},
};

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, error, info, instrument, warn};

const START_ACTION: &str = "START_RECORDING";
const STOP_ACTION: &str = "STOP_RECORDING";

/// Static settings of the controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Recorder name and location.
    pub identity: RecorderIdentity,
    /// Public-to-internal stream host rewrite.
    pub stream_route: StreamRoute,
    /// Where finished recordings are found.
    pub artifact: ArtifactLocator,
}

/// Result of a start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session started on the appliance.
    Started {
        /// Session code.
        code: String,
        /// Whether the session is streamed live.
        live: bool,
    },
    /// A session is already recording; the request waits for its stop.
    Queued,
    /// The appliance state does not allow a start.
    Refused,
}

/// Result of a stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// The session stopped and was handed off.
    Stopped {
        /// Code of the stopped session.
        code: String,
        /// Code of the queued session started right after, if any.
        follow_up: Option<String>,
    },
    /// Nothing was recording.
    Refused,
}

/// Drives the appliance and publishing service for start/stop requests.
pub struct RecordingController {
    appliance: Box<dyn Appliance>,
    publisher: Arc<dyn Publisher>,
    handoff: Box<dyn Handoff>,
    settings: ControllerSettings,
    session: RecordingSession,
}

impl RecordingController {
    /// Create a controller with an empty session record.
    pub fn new(
        appliance: Box<dyn Appliance>,
        publisher: Arc<dyn Publisher>,
        handoff: Box<dyn Handoff>,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            appliance,
            publisher,
            handoff,
            settings,
            session: RecordingSession::default(),
        }
    }

    /// Current session record.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// Query and parse the appliance status.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and `MalformedStatus`.
    #[instrument(skip(self))]
    pub fn current_status(&self) -> CoreResult<DeviceStatus> {
        let raw = self.appliance.query()?;
        parse_status(&raw)
    }

    /// Handle a start request.
    ///
    /// # Errors
    ///
    /// Propagates parser and transport failures. A disabled appliance is
    /// logged and reported as [`StartOutcome::Refused`].
    #[instrument(skip(self, request), fields(live = request.live))]
    pub fn start_recording(&mut self, request: RecordingRequest) -> CoreResult<StartOutcome> {
        let status = self.current_status()?;

        match status.record_state {
            RecordState::Ready => {
                self.session.queued_request = None;
                let live = request.live;
                let code = self.begin_session(request)?;
                Ok(StartOutcome::Started { code, live })
            }
            RecordState::On => {
                info!(
                    title = request.title.as_deref().unwrap_or_default(),
                    "Appliance already recording, queueing request"
                );
                self.session.queued_request = Some(request);
                self.refresh_active_metadata();
                Ok(StartOutcome::Queued)
            }
            RecordState::Disabled => {
                let refusal = RecorderError::invalid_state(
                    START_ACTION,
                    "appliance is stopped or recording is not enabled",
                );
                error!(error = %refusal, "Start refused");
                Ok(StartOutcome::Refused)
            }
            RecordState::Other(tag) => {
                let refusal = RecorderError::invalid_state(
                    START_ACTION,
                    format!("appliance reports record state {}", tag),
                );
                error!(error = %refusal, "Start refused");
                Ok(StartOutcome::Refused)
            }
        }
    }

    /// Handle a stop request.
    ///
    /// # Errors
    ///
    /// Propagates parser and transport failures. Stopping an appliance that
    /// is not recording is logged and reported as [`StopOutcome::Refused`].
    /// An upload rejection is logged by the handoff and does not fail.
    #[instrument(skip(self, request))]
    pub fn stop_recording(&mut self, request: RecordingRequest) -> CoreResult<StopOutcome> {
        let status = self.current_status()?;

        if status.record_state != RecordState::On {
            let refusal = RecorderError::invalid_state(
                STOP_ACTION,
                format!("recording was not started (state {})", status.record_state),
            );
            error!(error = %refusal, "Stop refused");
            return Ok(StopOutcome::Refused);
        }

        let metadata = match &self.session.active_metadata {
            Some(metadata) => metadata.clone(),
            None => {
                warn!("No session metadata in memory, synthesizing defaults");
                SessionMetadata::fallback(&self.settings.identity, Local::now())
            }
        };

        // Unknown origin (restart mid-session): the stream may be live.
        let was_live = self
            .session
            .pending_start_request
            .as_ref()
            .is_none_or(|r| r.live);
        if was_live {
            self.publisher
                .stop_streaming(&self.settings.identity.live_title())?;
        }
        self.appliance
            .execute(&ApplianceCommand::StopStreamingAndRecording)?;

        info!(code = %metadata.code, "Recording stopped");

        self.handoff.handoff(&self.settings.artifact, &metadata)?;
        self.session.end();

        let follow_up = match self.session.queued_request.clone() {
            Some(queued) if queued.has_title() => {
                let next = follow_up_request(&queued, &request);
                let code = self.begin_session(next)?;
                info!(code = %code, "Queued session started");
                Some(code)
            }
            Some(_) => {
                warn!("Queued request carries no title, discarding it");
                None
            }
            None => None,
        };
        self.session.queued_request = None;

        Ok(StopOutcome::Stopped {
            code: metadata.code,
            follow_up,
        })
    }

    /// Build metadata, command the appliance, then record the session.
    fn begin_session(&mut self, request: RecordingRequest) -> CoreResult<String> {
        let metadata =
            SessionMetadata::from_request(&request, &self.settings.identity, Local::now());

        if request.live {
            self.start_live()?;
        } else {
            self.appliance.execute(&ApplianceCommand::StartRecording)?;
        }

        let code = metadata.code.clone();
        info!(code = %code, title = %metadata.title, live = request.live, "Session started");
        self.session.begin(request, metadata);

        Ok(code)
    }

    fn start_live(&self) -> CoreResult<()> {
        let title = self.settings.identity.live_title();

        let prepared = self.publisher.prepare_streaming(&title)?;
        let target = self.settings.stream_route.rewrite(&prepared.publish_uri);
        debug!(target = %target, "Stream target rewritten");

        self.appliance.execute(&ApplianceCommand::SetRtmp {
            scheme: RTMP_SCHEME.to_string(),
            target,
        })?;
        self.publisher.start_streaming(&title)?;
        self.appliance
            .execute(&ApplianceCommand::StartStreamingAndRecording)?;

        Ok(())
    }

    /// Re-derive the active metadata from the request that started it.
    ///
    /// The session code and creation date stay those of the running session.
    fn refresh_active_metadata(&mut self) {
        let Some(origin) = &self.session.pending_start_request else {
            debug!("Originating request unknown, metadata will be synthesized at stop");
            return;
        };

        let mut metadata =
            SessionMetadata::from_request(origin, &self.settings.identity, Local::now());
        if let Some(current) = &self.session.active_metadata {
            metadata.code = current.code.clone();
            metadata.creation_date = current.creation_date.clone();
        }
        self.session.active_metadata = Some(metadata);
    }
}

/// Request used to start a queued follow-up session.
///
/// The title and live flag come from the queued request, every other field
/// from the stop request that ended the previous session. This mirrors the
/// deployed agent's behaviour and is pending confirmation with the system
/// owner; switching to the queued request's fields only touches this
/// function.
pub fn follow_up_request(queued: &RecordingRequest, stop: &RecordingRequest) -> RecordingRequest {
    RecordingRequest {
        title: queued.title.clone(),
        live: queued.live,
        speaker_id: stop.speaker_id.clone(),
        speaker: stop.speaker.clone(),
        speaker_email: stop.speaker_email.clone(),
        course_id: stop.course_id.clone(),
        profile: stop.profile.clone(),
    }
}
