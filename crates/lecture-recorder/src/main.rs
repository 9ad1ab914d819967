//! Lecture recorder: site-local agent driving a recording appliance and a
//! media publishing service on behalf of a remote control plane.

mod app;
mod app_command;
mod config;
mod console;
mod control_plane;
mod error;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    control_plane::LoggingControlPlane,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use std::{sync::Arc, time::Duration};

use lecture_recorder_core::{
    ActionDispatcher, ApplianceClient, ControlPlane, Publisher, PublishingClient,
    RecordingController, UploadHandoff,
};
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "lecture_recorder=debug,lecture_recorder_core=debug";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let Some(name) = std::env::args().nth(1) else {
        error!("Usage: lecture-recorder <recorder-name>");
        std::process::exit(2);
    };

    let config = match Config::load(&name) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let dispatcher = build_dispatcher(&config);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);

        let app = App {
            dispatcher: Arc::new(Mutex::new(dispatcher)),
            command_tx,
            command_rx,
        };

        if let Err(e) = app.run().await {
            error!(error = ?e, "App error");
        }
    });

    // The console forwarder may still be blocked reading stdin.
    rt.shutdown_timeout(Duration::from_millis(100));
}

/// Wire the adapters, handoff and controller from configuration.
fn build_dispatcher(config: &Config) -> ActionDispatcher {
    let appliance = ApplianceClient::new(&config.appliance.settings());
    let publisher: Arc<dyn Publisher> =
        Arc::new(PublishingClient::new(&config.publishing.settings()));
    let handoff = UploadHandoff::new(Arc::clone(&publisher), config.handoff_settings());

    let controller = RecordingController::new(
        Box::new(appliance),
        publisher,
        Box::new(handoff),
        config.controller_settings(),
    );

    let control_plane = LoggingControlPlane::new(&config.recorder.name);

    // A control-plane outage must not block the agent.
    if let Err(e) = control_plane.refresh_capabilities() {
        warn!(error = %e, "Failed to advertise capabilities at startup");
    }

    info!(recorder = %config.recorder.name, "Recorder wired");

    ActionDispatcher::new(controller, Box::new(control_plane))
}
