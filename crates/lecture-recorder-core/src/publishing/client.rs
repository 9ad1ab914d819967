//! Publishing service REST client.
//!
//! Session control lives under `lives/`, uploads under `medias/`. Every call
//! carries the static API key as an `api_key` parameter.

use crate::{
    CoreResult, RecorderError, SessionMetadata, http,
    publishing::{PrepareStreamingResponse, StreamingAck, UploadResponse},
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use ureq::Agent;

const PREPARE_PATH: &str = "lives/prepare/";
const START_PATH: &str = "lives/start/";
const STOP_PATH: &str = "lives/stop/";
const UPLOAD_PATH: &str = "medias/add/";

const STREAM_WIDTH: &str = "1280";
const STREAM_HEIGHT: &str = "720";
const STREAM_LAYOUT: &str = "composition_4";

/// Remote publishing service operations used by the controller and handoff.
pub trait Publisher: Send + Sync {
    /// Prepare a live stream and return its publish endpoint.
    fn prepare_streaming(&self, title: &str) -> CoreResult<PrepareStreamingResponse>;
    /// Mark the prepared live stream as started.
    fn start_streaming(&self, title: &str) -> CoreResult<StreamingAck>;
    /// Mark the live stream as stopped.
    fn stop_streaming(&self, title: &str) -> CoreResult<StreamingAck>;
    /// Register an uploaded artifact with its metadata.
    fn upload_artifact(&self, metadata: &SessionMetadata) -> CoreResult<UploadResponse>;
}

/// Connection settings for the publishing service.
#[derive(Debug, Clone)]
pub struct PublishingSettings {
    /// API root, e.g. `https://host/api/v2/`.
    pub base_url: String,
    /// Static API key.
    pub api_key: String,
    /// Timeout for session-control calls.
    pub timeout: Duration,
    /// Timeout for the upload call.
    pub upload_timeout: Duration,
}

/// HTTP implementation of [`Publisher`].
pub struct PublishingClient {
    agent: Agent,
    upload_agent: Agent,
    base_url: String,
    api_key: String,
}

impl PublishingClient {
    /// Create a client for the configured service.
    pub fn new(settings: &PublishingSettings) -> Self {
        Self {
            agent: http::build_agent(settings.timeout),
            upload_agent: http::build_agent(settings.upload_timeout),
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    #[track_caller]
    fn post_form<T: DeserializeOwned>(
        &self,
        agent: &Agent,
        path: &str,
        fields: &[(&str, &str)],
        with_query: bool,
    ) -> CoreResult<T> {
        let endpoint = self.endpoint(path);

        let mut form: Vec<(&str, &str)> = fields.to_vec();
        form.push(("api_key", self.api_key.as_str()));

        let mut request = agent.post(&endpoint);
        if with_query {
            request = request.query_pairs(form.iter().copied());
        }

        let response = request
            .send_form(form.iter().copied())
            .map_err(|e| RecorderError::transport(&endpoint, e.to_string()))?;

        let body = http::read_ok_body(&endpoint, response)?;

        serde_json::from_str(&body).map_err(|e| RecorderError::InvalidResponse {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl Publisher for PublishingClient {
    #[instrument(skip(self))]
    fn prepare_streaming(&self, title: &str) -> CoreResult<PrepareStreamingResponse> {
        let response: PrepareStreamingResponse = self.post_form(
            &self.agent,
            PREPARE_PATH,
            &[
                ("title", title),
                ("width", STREAM_WIDTH),
                ("height", STREAM_HEIGHT),
                ("layout", STREAM_LAYOUT),
            ],
            false,
        )?;

        info!(publish_uri = %response.publish_uri, "Live stream prepared");

        Ok(response)
    }

    #[instrument(skip(self))]
    fn start_streaming(&self, title: &str) -> CoreResult<StreamingAck> {
        let ack = self.post_form(&self.agent, START_PATH, &[("title", title)], false)?;
        debug!(ack = %ack, "Live stream started");
        Ok(ack)
    }

    #[instrument(skip(self))]
    fn stop_streaming(&self, title: &str) -> CoreResult<StreamingAck> {
        let ack = self.post_form(&self.agent, STOP_PATH, &[("title", title)], false)?;
        debug!(ack = %ack, "Live stream stopped");
        Ok(ack)
    }

    #[instrument(skip(self, metadata), fields(code = %metadata.code))]
    fn upload_artifact(&self, metadata: &SessionMetadata) -> CoreResult<UploadResponse> {
        self.post_form(&self.upload_agent, UPLOAD_PATH, &metadata.form_fields(), true)
    }
}
