//! Static catalog of recording profiles offered to the control plane.

use crate::CoreResult;

use std::collections::BTreeMap;

use serde::Serialize;

/// One profile entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Whether starting with this profile requires a password.
    pub has_password: bool,
    /// Whether sessions can be streamed live.
    pub can_live: bool,
    /// Profile identifier.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Profile kind.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// The profile catalog, keyed by identifier.
pub fn profile_catalog() -> BTreeMap<&'static str, Profile> {
    BTreeMap::from([(
        "omni",
        Profile {
            has_password: false,
            can_live: true,
            name: "omni",
            label: "Omnilive",
            kind: "recorder",
        },
    )])
}

/// The profile catalog serialized as a JSON object.
#[track_caller]
pub fn profile_catalog_json() -> CoreResult<String> {
    Ok(serde_json::to_string(&profile_catalog())?)
}
