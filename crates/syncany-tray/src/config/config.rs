//! Configuration management for syncany-tray.
//!
//! Handles loading and saving the TOML configuration file from the
//! platform config directory, with validation and atomic writes.

use crate::{
    AppError, AppResult,
    config::{
        EndpointConfig, EventsConfig, IconsConfig, LoggingConfig, MenuConfig,
        NotificationsConfig,
    },
};

use std::{fs, io::Write, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Daemon websocket endpoint.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Icon asset locations.
    #[serde(default)]
    pub icons: IconsConfig,
    /// Context menu layout.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Tray event queue.
    #[serde(default)]
    pub events: EventsConfig,
    /// Desktop notifications.
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from disk, creating a default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::parse(&contents)?;
            info!(config_path = ?config_path, "Configuration loaded");
            config
        } else {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config::default();
            config.save()?;
            config
        };

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text. Missing sections and fields
    /// take their defaults.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reject values the tray cannot run with.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        let problem = if self.endpoint.host.trim().is_empty() {
            Some("endpoint.host must not be empty")
        } else if self.endpoint.port == 0 {
            Some("endpoint.port must not be 0")
        } else if self.endpoint.client_id.trim().is_empty() {
            Some("endpoint.client_id must not be empty")
        } else if self.events.queue_capacity == 0 {
            Some("events.queue_capacity must be at least 1")
        } else {
            None
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

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

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "syncany", "Syncany").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("tray.toml"))
    }
}
