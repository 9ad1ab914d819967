/// Where the recorded artifact of a finished session can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocator {
    /// Already stored under the canonical name; nothing to move.
    Canonical,
    /// Files in the appliance mount whose name has this prefix and extension.
    Matching {
        /// File name prefix, e.g. `captation-room1-[`.
        prefix: String,
        /// Extension without the dot, e.g. `mp4`.
        extension: String,
    },
}

impl ArtifactLocator {
    /// Locator for the appliance's recordings of `file_prefix`.
    pub fn recordings_of(file_prefix: &str) -> Self {
        ArtifactLocator::Matching {
            prefix: format!("{}-[", file_prefix),
            extension: "mp4".to_string(),
        }
    }

    /// Whether `file_name` is designated by this locator.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ArtifactLocator::Canonical => false,
            ArtifactLocator::Matching { prefix, extension } => file_name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_suffix(extension.as_str()))
                .is_some_and(|rest| rest.ends_with('.')),
        }
    }
}
