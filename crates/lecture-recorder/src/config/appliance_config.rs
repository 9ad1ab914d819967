use crate::config::default_timeout_secs;

use std::time::Duration;

use lecture_recorder_core::ApplianceSettings;
use serde::{Deserialize, Serialize};

/// Recording appliance connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplianceConfig {
    /// Appliance address on the local network.
    pub address: String,
    /// Appliance login.
    pub login: String,
    /// Appliance password.
    pub password: String,
    /// Timeout for every appliance command, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            address: "X.X.X.X".to_string(),
            login: "admin".to_string(),
            password: "admin".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApplianceConfig {
    /// Settings for the appliance client.
    pub fn settings(&self) -> ApplianceSettings {
        ApplianceSettings {
            address: self.address.clone(),
            login: self.login.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
