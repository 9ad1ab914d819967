//! Appliance command endpoint client.
//!
//! Every command is a plain `GET` on the appliance's SDK page with a
//! `command` query parameter. The answer is a single text line.

use crate::{CoreResult, RecorderError, appliance::ApplianceCommand, http};

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, instrument};
use ureq::Agent;

const SDK_PATH: &str = "/Monarch/syncconnect/sdk.aspx";

/// Issues named commands to the recording appliance.
pub trait Appliance: Send {
    /// Send a command and return the raw response line.
    fn execute(&self, command: &ApplianceCommand) -> CoreResult<String>;

    /// Fetch the raw status line.
    fn query(&self) -> CoreResult<String> {
        self.execute(&ApplianceCommand::GetStatus)
    }
}

/// Connection settings for the appliance.
#[derive(Debug, Clone)]
pub struct ApplianceSettings {
    /// Host or IP address on the local network.
    pub address: String,
    /// Login embedded in the appliance address.
    pub login: String,
    /// Password embedded in the appliance address.
    pub password: String,
    /// Timeout applied to every command.
    pub timeout: Duration,
}

/// HTTP implementation of [`Appliance`].
///
/// Credentials that would sit in the address' userinfo travel as a basic
/// authorization header, which is what a client does with them on the wire.
/// The agent (and its connection pool) lives as long as the client.
pub struct ApplianceClient {
    agent: Agent,
    endpoint: String,
    authorization: String,
}

impl ApplianceClient {
    /// Create a client for the configured appliance.
    pub fn new(settings: &ApplianceSettings) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", settings.login, settings.password));

        Self {
            agent: http::build_agent(settings.timeout),
            endpoint: format!("http://{}{}", settings.address, SDK_PATH),
            authorization: format!("Basic {}", credentials),
        }
    }
}

impl Appliance for ApplianceClient {
    #[track_caller]
    #[instrument(skip(self), fields(command = %command))]
    fn execute(&self, command: &ApplianceCommand) -> CoreResult<String> {
        let response = self
            .agent
            .get(&self.endpoint)
            .header("Authorization", self.authorization.as_str())
            .query("command", command.to_string())
            .call()
            .map_err(|e| RecorderError::transport(&self.endpoint, e.to_string()))?;

        let body = http::read_ok_body(&self.endpoint, response)?;

        debug!(response = %body, "Appliance command answered");

        Ok(body)
    }
}
