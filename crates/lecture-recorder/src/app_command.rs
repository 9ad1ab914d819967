use lecture_recorder_core::Params;
use uuid::Uuid;

/// Commands sent from the inbound-action source to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Run a control-plane action.
    Action {
        /// Unique id for log correlation.
        request_id: Uuid,
        /// Action tag, e.g. `START_RECORDING`.
        action: String,
        /// Raw action parameters.
        params: Params,
    },
    /// Request application shutdown.
    Shutdown,
}
