//! Structured view of the parameters carried by a start/stop action.

use std::collections::BTreeMap;

use serde_json::Value;

/// Raw action parameters as delivered by the control plane.
pub type Params = BTreeMap<String, Value>;

pub(crate) const DEFAULT_TITLE: &str = "untitled";

/// Recording request with every optional field made explicit.
///
/// Built once at the boundary from raw [`Params`]. Absent fields stay
/// `None` here; defaults are applied when metadata is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRequest {
    /// Session title. Defaults to `"untitled"`, also when given as `null`.
    pub title: Option<String>,
    /// Speaker identifier. Defaults to `""`.
    pub speaker_id: Option<String>,
    /// Speaker display name. Defaults to `""`.
    pub speaker: Option<String>,
    /// Speaker email. Defaults to `""`.
    pub speaker_email: Option<String>,
    /// Course identifier. Defaults to `""`.
    pub course_id: Option<String>,
    /// Publishing profile. Defaults to `""`.
    pub profile: Option<String>,
    /// Whether the session is also streamed live.
    pub live: bool,
}

impl RecordingRequest {
    /// Interpret raw parameters.
    pub fn from_params(params: &Params) -> Self {
        Self {
            title: params
                .get("title")
                .map(|v| text_value(v).unwrap_or_else(|| DEFAULT_TITLE.to_string())),
            speaker_id: text_field(params, "speaker_id"),
            speaker: text_field(params, "speaker"),
            speaker_email: text_field(params, "speaker_email"),
            course_id: text_field(params, "course_id"),
            profile: text_field(params, "profile"),
            live: live_requested(params),
        }
    }

    /// Whether the request carries a `title` key.
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}

/// Whether the parameters ask for a live stream.
///
/// The deployed control plane signals live sessions by the presence of the
/// `live` key alone, so `{"live": false}` still streams. Switching to a
/// value-based reading only touches this function.
pub fn live_requested(params: &Params) -> bool {
    params.contains_key("live")
}

fn text_field(params: &Params, key: &str) -> Option<String> {
    params.get(key).and_then(text_value)
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
