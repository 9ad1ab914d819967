mod appliance_config;
#[allow(clippy::module_inception)]
mod config;
mod publishing_config;
mod recorder_config;
mod storage_config;

pub(crate) use {
    appliance_config::ApplianceConfig, config::Config, publishing_config::PublishingConfig,
    recorder_config::RecorderConfig, storage_config::StorageConfig,
};

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub(crate) const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 300;
pub(crate) const DEFAULT_OWNER_UID: u32 = 118;
pub(crate) const DEFAULT_OWNER_GID: u32 = 125;

pub(crate) fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub(crate) fn default_upload_timeout_secs() -> u64 {
    DEFAULT_UPLOAD_TIMEOUT_SECS
}

pub(crate) fn default_owner_uid() -> u32 {
    DEFAULT_OWNER_UID
}

pub(crate) fn default_owner_gid() -> u32 {
    DEFAULT_OWNER_GID
}

pub(crate) fn default_apply_ownership() -> bool {
    true
}
