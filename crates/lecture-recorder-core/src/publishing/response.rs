use serde::Deserialize;
use serde_json::{Map, Value};

/// Acknowledgement body of the start/stop streaming endpoints.
pub type StreamingAck = Value;

/// Answer of the prepare-streaming endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PrepareStreamingResponse {
    /// RTMP URI the stream must be pushed to.
    pub publish_uri: String,
    /// Remaining fields, kept for logging.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of the upload endpoint.
///
/// The service reports `success` either as a boolean or as the strings
/// `"true"` / `"false"`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Success flag, as sent.
    #[serde(default)]
    pub success: Value,
    /// Error description when rejected.
    #[serde(default)]
    pub error: Option<Value>,
}

impl UploadResponse {
    /// Whether the service explicitly refused the upload.
    pub fn is_rejected(&self) -> bool {
        match &self.success {
            Value::Bool(b) => !b,
            Value::String(s) => s.eq_ignore_ascii_case("false"),
            _ => false,
        }
    }

    /// Error message reported by the service, if any.
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "no error message".to_string(),
        }
    }
}
