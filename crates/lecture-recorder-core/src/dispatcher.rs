//! Routes inbound control-plane actions.

use crate::{
    CoreResult, RecorderError,
    control_plane::{CoarseStatus, ControlPlane},
    controller::{RecordingController, StartOutcome, StopOutcome},
    profiles::profile_catalog_json,
    session::{Params, RecordingRequest},
};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

const REMAINING_SPACE: (&str, &str) = ("remaining_space", "auto");

/// The closed set of actions understood by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Host shutdown notice. Logged only.
    Shutdown,
    /// Host reboot notice. Logged only.
    Reboot,
    /// Start (or queue) a recording session.
    StartRecording,
    /// Stop the current session.
    StopRecording,
    /// Refresh capabilities and return the profile catalog.
    ListProfiles,
}

impl FromStr for Action {
    type Err = RecorderError;

    #[track_caller]
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "SHUTDOWN" => Ok(Action::Shutdown),
            "REBOOT" => Ok(Action::Reboot),
            "START_RECORDING" => Ok(Action::StartRecording),
            "STOP_RECORDING" => Ok(Action::StopRecording),
            "LIST_PROFILES" => Ok(Action::ListProfiles),
            other => Err(RecorderError::UnsupportedAction {
                action: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Shutdown => "SHUTDOWN",
            Action::Reboot => "REBOOT",
            Action::StartRecording => "START_RECORDING",
            Action::StopRecording => "STOP_RECORDING",
            Action::ListProfiles => "LIST_PROFILES",
        })
    }
}

/// One inbound action with its raw parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// Action to perform.
    pub action: Action,
    /// Raw parameters, possibly sparse.
    pub params: Params,
}

/// Entry point for every control-plane action.
///
/// Actions are processed one at a time, to completion.
pub struct ActionDispatcher {
    controller: RecordingController,
    control_plane: Box<dyn ControlPlane>,
}

impl ActionDispatcher {
    /// Create a dispatcher around a controller and the control plane.
    pub fn new(controller: RecordingController, control_plane: Box<dyn ControlPlane>) -> Self {
        Self {
            controller,
            control_plane,
        }
    }

    /// Controller driven by this dispatcher.
    pub fn controller(&self) -> &RecordingController {
        &self.controller
    }

    /// Handle an action given by its tag.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAction` for unknown tags, and propagates any
    /// parser or transport failure of the action.
    #[track_caller]
    pub fn handle(&mut self, action: &str, params: Params) -> CoreResult<Option<String>> {
        let action = action.parse::<Action>()?;
        self.dispatch(ActionRequest { action, params })
    }

    /// Handle a typed action; returns the payload to send back, if any.
    #[instrument(skip(self, request), fields(action = %request.action))]
    pub fn dispatch(&mut self, request: ActionRequest) -> CoreResult<Option<String>> {
        match request.action {
            Action::Shutdown => {
                info!("Shutdown requested");
                Ok(None)
            }
            Action::Reboot => {
                info!("Reboot requested");
                Ok(None)
            }
            Action::StartRecording => {
                info!(params = ?request.params, "Starting recording");
                self.report(CoarseStatus::Initializing, &[REMAINING_SPACE]);

                let outcome = self
                    .controller
                    .start_recording(RecordingRequest::from_params(&request.params));
                self.report(CoarseStatus::Recording, &[]);

                if let StartOutcome::Started { code, live } = outcome? {
                    info!(code = %code, live = live, "Recording session started");
                }
                Ok(None)
            }
            Action::StopRecording => {
                info!("Stopping recording");
                self.report(CoarseStatus::Ready, &[REMAINING_SPACE]);

                let outcome = self
                    .controller
                    .stop_recording(RecordingRequest::from_params(&request.params))?;
                if let StopOutcome::Stopped { code, follow_up } = outcome {
                    info!(code = %code, follow_up = ?follow_up, "Recording session stopped");
                }
                Ok(None)
            }
            Action::ListProfiles => {
                info!("Updating capabilities");
                self.control_plane.refresh_capabilities()?;
                info!("Returning list of profiles");
                Ok(Some(profile_catalog_json()?))
            }
        }
    }

    fn report(&self, status: CoarseStatus, extra: &[(&str, &str)]) {
        if let Err(e) = self.control_plane.report_status(status, extra) {
            warn!(status = %status, error = %e, "Failed to report status");
        }
    }
}
