use std::path::PathBuf;

use lecture_recorder_core::{ArtifactLocator, RecorderIdentity};
use serde::{Deserialize, Serialize};

/// Identity of this recorder and where its recordings land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Short recorder name, suffix of session codes.
    pub name: String,
    /// Room name shown in metadata and live titles.
    pub location: String,
    /// Prefix of the appliance's recording file names.
    pub file_prefix: String,
    /// Local mount of the appliance's recordings.
    pub mount_dir: PathBuf,
}

impl RecorderConfig {
    /// Default configuration for a recorder called `name`.
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: format!("Room {}", name),
            file_prefix: format!("captation-{}", name),
            mount_dir: PathBuf::from("/home/omnictrl").join(name),
        }
    }

    /// Recorder identity for metadata.
    pub fn identity(&self) -> RecorderIdentity {
        RecorderIdentity {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }

    /// Locator of the appliance's recordings.
    pub fn artifact(&self) -> ArtifactLocator {
        ArtifactLocator::recordings_of(&self.file_prefix)
    }
}
