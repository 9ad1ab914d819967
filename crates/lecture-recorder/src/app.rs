use crate::{AppCommand, AppError, AppResult, console};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use lecture_recorder_core::{ActionDispatcher, Params};
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Main application state.
///
/// Actions run on a blocking task because the adapters use blocking HTTP.
/// Each action is awaited before the next command is taken, so at most one
/// action is in flight.
pub struct App {
    pub(crate) dispatcher: Arc<Mutex<ActionDispatcher>>,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Lecture recorder starting");

        // Console forwarding via single persistent blocking task.
        //
        // Shutdown: when command_rx is dropped (main loop breaks),
        // blocking_send() fails on the next line, breaking the loop.
        // EOF on stdin sends Shutdown.
        let console_tx = self.command_tx.clone();
        let console_handle =
            tokio::task::spawn_blocking(move || console::forward_stdin(console_tx));

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::Action { request_id, action, params } => {
                            self.handle_action(request_id, action, params).await;
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                signal = tokio::signal::ctrl_c() => {
                    if let Err(e) = signal {
                        error!(error = ?e, "Failed to listen for Ctrl-C");
                    }
                    info!("Interrupt received, stopping application");
                    break;
                }
            }
        }

        drop(self.command_rx);

        match tokio::time::timeout(Duration::from_secs(1), console_handle).await {
            Ok(Ok(())) => info!("Console forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Console forwarder task panicked"),
            Err(_) => info!(
                "Console forwarder is blocked on input, \
                     will be cleaned up on exit"
            ),
        }

        info!("Lecture recorder shut down successfully");

        Ok(())
    }

    /// Run one action to completion and log its outcome.
    #[instrument(skip(self, params))]
    async fn handle_action(&self, request_id: Uuid, action: String, params: Params) {
        info!(request_id = %request_id, action = %action, "Action received");

        match self.run_action(action.clone(), params).await {
            Ok(Some(response)) => {
                info!(request_id = %request_id, response = %response, "Action answered");
                println!("{}", response);
            }
            Ok(None) => info!(request_id = %request_id, "Action completed"),
            Err(e) => {
                error!(request_id = %request_id, action = %action, error = %e, "Action failed")
            }
        }
    }

    async fn run_action(&self, action: String, params: Params) -> AppResult<Option<String>> {
        let dispatcher = Arc::clone(&self.dispatcher);

        let response = tokio::task::spawn_blocking(move || {
            let mut dispatcher = dispatcher.blocking_lock();
            dispatcher.handle(&action, params)
        })
        .await
        .map_err(|e| AppError::ActionTaskFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })??;

        Ok(response)
    }
}
