//! Application configuration.

use crate::error::ConfigError;
use crate::mock_data::default_user_name;
use crate::model::UserRole;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = ".medichat";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "medichat.log";

fn default_unread_notifications() -> u32 {
    3
}

fn default_with_background_color() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Role of the signed-in staff member.
    #[serde(default)]
    pub role: UserRole,
    /// Name shown in the sidebar profile. Falls back to a per-role default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default = "default_unread_notifications")]
    pub unread_notifications: u32,
    #[serde(default = "default_with_background_color")]
    pub with_background_color: bool,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: UserRole::default(),
            user_name: None,
            unread_notifications: default_unread_notifications(),
            with_background_color: default_with_background_color(),
            log_level: None,
        }
    }
}

impl Config {
    /// Create Config for the given role, keeping all other defaults.
    pub fn new(role: UserRole, user_name: Option<String>) -> Self {
        Config {
            role,
            user_name,
            ..Config::default()
        }
    }

    /// Name to display for the signed-in user.
    pub fn display_name(&self) -> String {
        self.user_name
            .clone()
            .unwrap_or_else(|| default_user_name(self.role).to_string())
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the config at `path` if it exists, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Directory holding the config and log files, `$HOME/.medichat`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR))
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

pub fn get_log_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(LOG_FILE))
}
