//! Moves a finished recording into the publishing service's media tree and
//! registers it.
//!
//! Filesystem steps are best-effort: a missing or unmovable artifact is
//! logged and the metadata is still submitted, so the publishing service
//! knows about the session. Transport failures of the upload call propagate.

use crate::{
    CoreResult, RecorderError, SessionMetadata, handoff::ArtifactLocator, publishing::Publisher,
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
    sync::Arc,
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// File name of the artifact inside its session directory.
pub const CANONICAL_FILE_NAME: &str = "video_original.mp4";

/// Hands a finished artifact and its metadata to the publishing service.
pub trait Handoff: Send {
    /// Relocate the artifact and submit the metadata.
    fn handoff(&self, artifact: &ArtifactLocator, metadata: &SessionMetadata) -> CoreResult<()>;
}

/// Numeric owner applied to session directories and artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    /// Owner user id.
    pub uid: u32,
    /// Owner group id.
    pub gid: u32,
}

/// Filesystem layout used by the handoff.
#[derive(Debug, Clone)]
pub struct HandoffSettings {
    /// Directory where the appliance's recordings are mounted.
    pub mount_dir: PathBuf,
    /// Root of the publishing service's media tree.
    pub media_root: PathBuf,
    /// Ownership policy; `None` leaves ownership untouched.
    pub ownership: Option<Ownership>,
}

/// Filesystem + publishing service implementation of [`Handoff`].
pub struct UploadHandoff {
    publisher: Arc<dyn Publisher>,
    settings: HandoffSettings,
}

impl UploadHandoff {
    /// Create a handoff sharing the controller's publisher.
    pub fn new(publisher: Arc<dyn Publisher>, settings: HandoffSettings) -> Self {
        Self {
            publisher,
            settings,
        }
    }

    /// Canonical directory of the session identified by `code`.
    pub fn session_dir(&self, code: &str) -> PathBuf {
        self.settings.media_root.join(code)
    }

    #[track_caller]
    fn prepare_session_dir(&self, dir: &Path) -> CoreResult<()> {
        if dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(dir)?;
        self.apply_ownership(dir)?;

        debug!(dir = ?dir, "Session directory created");

        Ok(())
    }

    #[track_caller]
    fn relocate(&self, artifact: &ArtifactLocator, dir: &Path) -> CoreResult<usize> {
        let mut matches = Vec::new();
        for entry in fs::read_dir(&self.settings.mount_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() && artifact.matches(&entry.file_name().to_string_lossy())
            {
                matches.push(entry.path());
            }
        }
        matches.sort();

        if matches.len() > 1 {
            warn!(count = matches.len(), "Several artifacts match, the last one wins");
        }

        let target = dir.join(CANONICAL_FILE_NAME);
        for source in &matches {
            self.apply_ownership(source)?;
            move_file(source, &target)?;
            info!(source = ?source, target = ?target, "Artifact moved");
        }

        Ok(matches.len())
    }

    #[track_caller]
    fn apply_ownership(&self, path: &Path) -> CoreResult<()> {
        let Some(owner) = self.settings.ownership else {
            return Ok(());
        };

        #[cfg(unix)]
        std::os::unix::fs::chown(path, Some(owner.uid), Some(owner.gid))?;

        #[cfg(not(unix))]
        debug!(path = ?path, uid = owner.uid, gid = owner.gid, "Ownership not supported here");

        Ok(())
    }
}

impl Handoff for UploadHandoff {
    #[instrument(skip(self, metadata), fields(code = %metadata.code))]
    fn handoff(&self, artifact: &ArtifactLocator, metadata: &SessionMetadata) -> CoreResult<()> {
        let dir = self.session_dir(&metadata.code);

        if let Err(e) = self.prepare_session_dir(&dir) {
            error!(dir = ?dir, error = %e, "Failed to prepare session directory");
        }

        match artifact {
            ArtifactLocator::Canonical => debug!("Artifact already under its canonical name"),
            ArtifactLocator::Matching { .. } => match self.relocate(artifact, &dir) {
                Ok(0) => warn!(
                    mount_dir = ?self.settings.mount_dir,
                    "No recorded artifact found in the appliance mount"
                ),
                Ok(_) => {}
                Err(e) => error!(error = %e, "Failed to relocate recorded artifact"),
            },
        }

        info!("Submitting artifact metadata");
        let response = self.publisher.upload_artifact(metadata)?;

        if response.is_rejected() {
            let rejection = RecorderError::UploadRejected {
                code: metadata.code.clone(),
                reason: response.error_message(),
                location: ErrorLocation::from(Location::caller()),
            };
            error!(error = %rejection, "Publishing service rejected the upload");
        } else {
            info!("Artifact accepted by the publishing service");
        }

        Ok(())
    }
}

/// Rename, falling back to copy + delete across filesystems.
fn move_file(source: &Path, target: &Path) -> std::io::Result<()> {
    if fs::rename(source, target).is_ok() {
        return Ok(());
    }

    fs::copy(source, target)?;
    fs::remove_file(source)
}
