//! Console delivery of inbound actions.
//!
//! Reads one JSON object per stdin line, e.g.
//! `{"action": "START_RECORDING", "params": {"title": "Algebra"}}`,
//! and forwards it to the application loop. End of input shuts down.

use crate::{AppCommand, AppError, AppResult};

use std::{io::BufRead, panic::Location};

use error_location::ErrorLocation;
use lecture_recorder_core::Params;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct InboundAction {
    action: String,
    #[serde(default)]
    params: Params,
}

/// Decode one console line. Blank lines yield `None`.
#[track_caller]
pub fn parse_line(line: &str) -> AppResult<Option<AppCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let inbound: InboundAction =
        serde_json::from_str(line).map_err(|e| AppError::InvalidCommand {
            reason: format!("Failed to decode action: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Some(AppCommand::Action {
        request_id: Uuid::new_v4(),
        action: inbound.action,
        params: inbound.params,
    }))
}

/// Forward stdin lines to `command_tx` until EOF or the receiver closes.
///
/// Blocking; run it on a blocking task.
pub fn forward_stdin(command_tx: mpsc::Sender<AppCommand>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = ?e, "Failed to read console input");
                break;
            }
        };

        match parse_line(&line) {
            Ok(Some(cmd)) => {
                if command_tx.blocking_send(cmd).is_err() {
                    debug!("Command channel closed, console forwarder stopping");
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Ignoring console line"),
        }
    }

    info!("Console input closed");
    let _ = command_tx.blocking_send(AppCommand::Shutdown);
}
