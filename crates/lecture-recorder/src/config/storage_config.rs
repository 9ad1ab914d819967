use crate::config::{default_apply_ownership, default_owner_gid, default_owner_uid};

use std::path::PathBuf;

use lecture_recorder_core::Ownership;
use serde::{Deserialize, Serialize};

/// Publishing service media tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root of the per-session directories.
    pub media_root: PathBuf,
    /// Owner uid of moved files.
    #[serde(default = "default_owner_uid")]
    pub owner_uid: u32,
    /// Owner gid of moved files.
    #[serde(default = "default_owner_gid")]
    pub owner_gid: u32,
    /// Whether to change ownership at all.
    #[serde(default = "default_apply_ownership")]
    pub apply_ownership: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("/home/msuser/msinstance/media/resources"),
            owner_uid: default_owner_uid(),
            owner_gid: default_owner_gid(),
            apply_ownership: default_apply_ownership(),
        }
    }
}

impl StorageConfig {
    /// Ownership policy, if enabled.
    pub fn ownership(&self) -> Option<Ownership> {
        self.apply_ownership.then_some(Ownership {
            uid: self.owner_uid,
            gid: self.owner_gid,
        })
    }
}
