//! Lecture Recorder Core Library
//!
//! Site-local control agent logic bridging a control plane, a lecture
//! recording appliance and a media publishing service.
//!
//! # Example
//!
//! ```no_run
//! use lecture_recorder_core::{
//!     ActionDispatcher, ApplianceClient, ApplianceSettings, ArtifactLocator, CoarseStatus,
//!     ControlPlane, ControllerSettings, CoreResult, HandoffSettings, Params, PublishingClient,
//!     PublishingSettings, RecorderIdentity, RecordingController, StreamRoute, UploadHandoff,
//! };
//!
//! use std::{sync::Arc, time::Duration};
//!
//! struct Silent;
//!
//! impl ControlPlane for Silent {
//!     fn report_status(&self, _: CoarseStatus, _: &[(&str, &str)]) -> CoreResult<()> {
//!         Ok(())
//!     }
//!     fn refresh_capabilities(&self) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let appliance = ApplianceClient::new(&ApplianceSettings {
//!         address: "192.168.1.20".to_string(),
//!         login: "admin".to_string(),
//!         password: "admin".to_string(),
//!         timeout: Duration::from_secs(120),
//!     });
//!     let publisher = Arc::new(PublishingClient::new(&PublishingSettings {
//!         base_url: "https://media.example.org/api/v2/".to_string(),
//!         api_key: "secret".to_string(),
//!         timeout: Duration::from_secs(120),
//!         upload_timeout: Duration::from_secs(300),
//!     }));
//!     let handoff = UploadHandoff::new(
//!         publisher.clone(),
//!         HandoffSettings {
//!             mount_dir: "/home/recorder/room1".into(),
//!             media_root: "/srv/media/resources".into(),
//!             ownership: None,
//!         },
//!     );
//!     let controller = RecordingController::new(
//!         Box::new(appliance),
//!         publisher,
//!         Box::new(handoff),
//!         ControllerSettings {
//!             identity: RecorderIdentity {
//!                 name: "room1".to_string(),
//!                 location: "Room 1".to_string(),
//!             },
//!             stream_route: StreamRoute {
//!                 public_host: "stream.example.org".to_string(),
//!                 internal_host: "10.0.0.10".to_string(),
//!             },
//!             artifact: ArtifactLocator::recordings_of("capture-room1"),
//!         },
//!     );
//!
//!     let mut dispatcher = ActionDispatcher::new(controller, Box::new(Silent));
//!     dispatcher.handle("START_RECORDING", Params::new())?;
//!     dispatcher.handle("STOP_RECORDING", Params::new())?;
//!     Ok(())
//! }
//! ```

mod appliance;
mod control_plane;
mod controller;
mod dispatcher;
mod error;
mod handoff;
mod http;
mod profiles;
mod publishing;
mod session;
mod status;

pub use {
    appliance::{Appliance, ApplianceClient, ApplianceCommand, ApplianceSettings},
    control_plane::{CoarseStatus, ControlPlane},
    controller::{
        ControllerSettings, RecordingController, StartOutcome, StopOutcome, follow_up_request,
    },
    dispatcher::{Action, ActionDispatcher, ActionRequest},
    error::{RecorderError, Result as CoreResult},
    handoff::{
        ArtifactLocator, CANONICAL_FILE_NAME, Handoff, HandoffSettings, Ownership, UploadHandoff,
    },
    profiles::{Profile, profile_catalog, profile_catalog_json},
    publishing::{
        PrepareStreamingResponse, Publisher, PublishingClient, PublishingSettings, RTMP_SCHEME,
        StreamRoute, StreamingAck, UploadResponse,
    },
    session::{
        Params, RecorderIdentity, RecordingRequest, RecordingSession, SessionMetadata,
        live_requested, session_code,
    },
    status::{DeviceStatus, RecordState, parse_status},
};

#[cfg(test)]
mod tests;
