//! Configuration management for lecture-recorder.
//!
//! One TOML file per recorder, stored in the platform config directory and
//! named after the recorder. Writes are atomic.

use crate::{
    AppError, AppResult,
    config::{ApplianceConfig, PublishingConfig, RecorderConfig, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use lecture_recorder_core::{ControllerSettings, HandoffSettings};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recording appliance connection.
    pub appliance: ApplianceConfig,
    /// Publishing service connection.
    pub publishing: PublishingConfig,
    /// Recorder identity and recording mount.
    pub recorder: RecorderConfig,
    /// Publishing media tree.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load the configuration of recorder `name`, creating a default if absent.
    #[track_caller]
    #[instrument]
    pub fn load(name: &str) -> AppResult<Self> {
        let config_path = Self::config_path(name)?;
        Self::load_from(&config_path, name)
    }

    /// Load configuration from `config_path`, creating a default if absent.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path, name: &str) -> AppResult<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            if config.recorder.name != name {
                warn!(
                    file_name = %name,
                    recorder_name = %config.recorder.name,
                    "Recorder name differs from config file name"
                );
            }

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default(config_path, name)
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Controller settings derived from this configuration.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            identity: self.recorder.identity(),
            stream_route: self.publishing.stream_route(),
            artifact: self.recorder.artifact(),
        }
    }

    /// Handoff settings derived from this configuration.
    pub fn handoff_settings(&self) -> HandoffSettings {
        HandoffSettings {
            mount_dir: self.recorder.mount_dir.clone(),
            media_root: self.storage.media_root.clone(),
            ownership: self.storage.ownership(),
        }
    }

    #[track_caller]
    fn config_path(name: &str) -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("fr", "lecture-recorder", "Lecture-Recorder")
            .ok_or_else(|| AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join(format!("{}.toml", name)))
    }

    #[track_caller]
    fn create_default(config_path: &Path, name: &str) -> AppResult<Self> {
        let config = Config {
            appliance: ApplianceConfig::default(),
            publishing: PublishingConfig::default(),
            recorder: RecorderConfig::for_name(name),
            storage: StorageConfig::default(),
        };

        config.save_to(config_path)?;

        warn!(
            config_path = ?config_path,
            "Default config created. Appliance address and API key must be set before recording."
        );

        Ok(config)
    }
}
