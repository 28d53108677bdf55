//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::error::ConfigError;
use crate::model::UserRole;
use crate::ui::UIConfig;
use std::path::Path;

/// Session data for both TUI and snapshot modes
#[derive(Debug, Clone)]
pub struct SessionData {
    pub ui_config: UIConfig,
    /// Log filter from the config file, used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Why the config file was replaced by defaults, reported once logging is up.
    pub config_warning: Option<String>,
}

/// Command-line overrides. `None` leaves the config value in place.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub role: Option<UserRole>,
    pub user_name: Option<String>,
    pub no_background_color: bool,
}

/// Merge the config file with command-line flags. Flags win.
///
/// An explicit role without an explicit name uses that role's default name,
/// not a name configured for another role.
pub fn resolve_session(config: &Config, overrides: SessionOverrides) -> SessionData {
    let role_changed = overrides.role.is_some_and(|role| role != config.role);
    let role = overrides.role.unwrap_or(config.role);

    let user_name = match overrides.user_name {
        Some(name) => name,
        None if role_changed => Config::new(role, None).display_name(),
        None => config.display_name(),
    };

    let with_background_color = config.with_background_color && !overrides.no_background_color;

    SessionData {
        ui_config: UIConfig::new(
            role,
            user_name,
            config.unread_notifications,
            with_background_color,
        ),
        log_level: config.log_level.clone(),
        config_warning: None,
    }
}

/// Load the config at `path`. Invalid JSON yields the defaults and a warning.
pub fn load_config(path: &Path) -> Result<(Config, Option<String>), ConfigError> {
    match Config::load_or_default(path) {
        Ok(config) => Ok((config, None)),
        Err(ConfigError::Json(e)) => Ok((
            Config::default(),
            Some(format!("Ignoring invalid config {}: {}", path.display(), e)),
        )),
        Err(e) => Err(e),
    }
}

/// Load `$HOME/.medichat/config.json` (or defaults) and apply the flags.
pub fn setup_session(overrides: SessionOverrides) -> Result<SessionData, ConfigError> {
    let (config, config_warning) = load_config(&get_config_path()?)?;
    Ok(SessionData {
        config_warning,
        ..resolve_session(&config, overrides)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_manager_with_default_name() {
        let session = resolve_session(&Config::default(), SessionOverrides::default());
        assert_eq!(session.ui_config.role, UserRole::Manager);
        assert_eq!(session.ui_config.user_name, "Dr. João Silva");
        assert_eq!(session.ui_config.unread_notifications, 3);
        assert!(session.ui_config.with_background_color);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            log_level: Some("debug".to_string()),
            ..Config::new(UserRole::Attendant, Some("Bia".to_string()))
        };
        let session = resolve_session(
            &config,
            SessionOverrides {
                role: None,
                user_name: Some("Carla".to_string()),
                no_background_color: true,
            },
        );
        assert_eq!(session.ui_config.role, UserRole::Attendant);
        assert_eq!(session.ui_config.user_name, "Carla");
        assert!(!session.ui_config.with_background_color);
        assert_eq!(session.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_name_kept_for_same_role() {
        let config = Config::new(UserRole::Attendant, Some("Bia".to_string()));
        let same = resolve_session(
            &config,
            SessionOverrides {
                role: Some(UserRole::Attendant),
                ..SessionOverrides::default()
            },
        );
        assert_eq!(same.ui_config.user_name, "Bia");

        let other = resolve_session(
            &config,
            SessionOverrides {
                role: Some(UserRole::Manager),
                ..SessionOverrides::default()
            },
        );
        assert_eq!(other.ui_config.user_name, "Dr. João Silva");
    }

    #[test]
    fn invalid_config_falls_back_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let (config, warning) = load_config(&path).unwrap();
        assert_eq!(config, Config::default());
        let warning = warning.unwrap();
        assert!(warning.starts_with("Ignoring invalid config"));
        assert!(warning.contains("config.json"));
    }

    #[test]
    fn missing_config_loads_defaults_quietly() {
        let dir = tempdir().unwrap();
        let (config, warning) = load_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
