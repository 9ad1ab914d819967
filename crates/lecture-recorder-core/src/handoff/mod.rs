mod locator;
mod upload_handoff;

pub use {
    locator::ArtifactLocator,
    upload_handoff::{CANONICAL_FILE_NAME, Handoff, HandoffSettings, Ownership, UploadHandoff},
};
