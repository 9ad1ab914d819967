use crate::config::{default_timeout_secs, default_upload_timeout_secs};

use std::time::Duration;

use lecture_recorder_core::{PublishingSettings, StreamRoute};
use serde::{Deserialize, Serialize};

/// Media publishing service connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingConfig {
    /// API root URL.
    pub base_url: String,
    /// Static API key.
    pub api_key: String,
    /// Streaming hostname found in publish URIs.
    pub public_stream_host: String,
    /// Internal address the appliance streams to instead.
    pub internal_stream_host: String,
    /// Timeout for live control calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Timeout for the upload call, in seconds.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mediaserver.captation.upmc.fr/api/v2/".to_string(),
            api_key: String::new(),
            public_stream_host: "streaming-mserver.upmc.fr".to_string(),
            internal_stream_host: "10.11.0.10".to_string(),
            timeout_secs: default_timeout_secs(),
            upload_timeout_secs: default_upload_timeout_secs(),
        }
    }
}

impl PublishingConfig {
    /// Settings for the publishing client.
    pub fn settings(&self) -> PublishingSettings {
        PublishingSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            upload_timeout: Duration::from_secs(self.upload_timeout_secs),
        }
    }

    /// Stream host rewrite applied to publish URIs.
    pub fn stream_route(&self) -> StreamRoute {
        StreamRoute {
            public_host: self.public_stream_host.clone(),
            internal_host: self.internal_stream_host.clone(),
        }
    }
}
