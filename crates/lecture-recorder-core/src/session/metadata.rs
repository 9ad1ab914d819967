//! Session metadata sent along with the uploaded artifact.

use crate::session::{RecordingRequest, request::DEFAULT_TITLE};

use chrono::{DateTime, Local};
use serde::Serialize;

const LANGUAGE: &str = "fr";
const LAYOUT: &str = "composition_4";
const UNLISTED: &str = "no";

const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CODE_DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Static identity of this recorder, from configuration.
#[derive(Debug, Clone)]
pub struct RecorderIdentity {
    /// Short recorder name, e.g. `amphi15`. Suffix of every session code.
    pub name: String,
    /// Human-readable room name.
    pub location: String,
}

impl RecorderIdentity {
    /// Title used for every live stream of this recorder.
    pub fn live_title(&self) -> String {
        format!("Live {}", self.location)
    }
}

/// Fully populated metadata bundle for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionMetadata {
    /// Session title.
    pub title: String,
    /// Local start time, second precision.
    pub creation_date: String,
    /// Recorder location.
    pub location: String,
    /// Always `fr`.
    pub language: String,
    /// Always `composition_4`.
    pub layout: String,
    /// Timestamp plus recorder name; see [`session_code`].
    pub code: String,
    /// Speaker identifier.
    pub speaker_id: String,
    /// Speaker display name.
    pub speaker_name: String,
    /// Speaker email.
    pub speaker_email: String,
    /// Course identifier.
    pub course_id: String,
    /// Publishing profile.
    pub profile: String,
    /// Always `no`.
    pub unlisted: String,
}

impl SessionMetadata {
    /// Build metadata for a request started at `now`, applying every default.
    pub fn from_request(
        request: &RecordingRequest,
        identity: &RecorderIdentity,
        now: DateTime<Local>,
    ) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            title: request
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            creation_date: now.format(CREATION_DATE_FORMAT).to_string(),
            location: identity.location.clone(),
            language: LANGUAGE.to_string(),
            layout: LAYOUT.to_string(),
            code: session_code(now, &identity.name),
            speaker_id: field(&request.speaker_id),
            speaker_name: field(&request.speaker),
            speaker_email: field(&request.speaker_email),
            course_id: field(&request.course_id),
            profile: field(&request.profile),
            unlisted: UNLISTED.to_string(),
        }
    }

    /// Default metadata for a recording this process did not start.
    pub fn fallback(identity: &RecorderIdentity, now: DateTime<Local>) -> Self {
        Self::from_request(&RecordingRequest::default(), identity, now)
    }

    /// Metadata as form fields, in declaration order.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("creation_date", self.creation_date.as_str()),
            ("location", self.location.as_str()),
            ("language", self.language.as_str()),
            ("layout", self.layout.as_str()),
            ("code", self.code.as_str()),
            ("speaker_id", self.speaker_id.as_str()),
            ("speaker_name", self.speaker_name.as_str()),
            ("speaker_email", self.speaker_email.as_str()),
            ("course_id", self.course_id.as_str()),
            ("profile", self.profile.as_str()),
            ("unlisted", self.unlisted.as_str()),
        ]
    }
}

/// Session code: local time to the second followed by the recorder name.
///
/// Two sessions started within the same second share a code.
pub fn session_code(now: DateTime<Local>, recorder_name: &str) -> String {
    format!("{}_{}", now.format(CODE_DATE_FORMAT), recorder_name)
}
