use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::Helper;
use crate::errors::Result;

/// Dialog settings loaded from file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Log every command line at info level
    #[serde(default)]
    pub verbose: bool,

    /// Helper to use when several are installed
    #[serde(default)]
    pub preferred_helper: Option<Helper>,

    /// How long notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u32,

    /// Message box width for the zenity family
    #[serde(default = "default_message_width")]
    pub message_width: u32,

    /// First wait slice when blocking on a dialog
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Longest wait slice once backoff has grown
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            preferred_helper: None,
            notification_secs: default_notification_secs(),
            message_width: default_message_width(),
            poll_interval_ms: default_poll_interval_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

fn default_notification_secs() -> u32 {
    5
}

fn default_message_width() -> u32 {
    300
}

fn default_poll_interval_ms() -> u64 {
    20
}

fn default_max_backoff_ms() -> u64 {
    200
}

impl DialogConfig {
    /// Load configuration from default path (~/.config/portable-dialogs/config.toml)
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Get the default configuration path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from("~/.config/portable-dialogs/config.toml"),
            |dirs| dirs.config_dir().join("portable-dialogs").join("config.toml"),
        )
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from_path(path: PathBuf) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration, reporting any read or parse error
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    /// Generate example configuration file content
    pub fn example() -> String {
        r#"# portable-dialogs configuration
# Place this file at ~/.config/portable-dialogs/config.toml

# Log every helper command line
verbose = false

# Helper to prefer when several are installed:
# "zenity", "matedialog", "qarma" or "kdialog"
# preferred_helper = "kdialog"

# Seconds a notification stays visible
notification_secs = 5

# Message box width (zenity, matedialog, qarma)
message_width = 300

# Polling while waiting for a dialog: first slice and backoff ceiling (ms)
poll_interval_ms = 20
max_backoff_ms = 200
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = DialogConfig::load_from_path(tmp.path().join("nope.toml"));
        assert_eq!(config, DialogConfig::default());
        assert_eq!(config.notification_secs, 5);
        assert_eq!(config.poll_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_example_parses() {
        let config: DialogConfig = toml::from_str(&DialogConfig::example()).unwrap();
        assert_eq!(config, DialogConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: DialogConfig =
            toml::from_str("preferred_helper = \"kdialog\"\nmessage_width = 420\n").unwrap();
        assert_eq!(config.preferred_helper, Some(Helper::Kdialog));
        assert_eq!(config.message_width, 420);
        assert_eq!(config.max_backoff_ms, 200);
    }

    #[test]
    fn test_save_and_read_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let config = DialogConfig {
            verbose: true,
            preferred_helper: Some(Helper::Qarma),
            ..DialogConfig::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(DialogConfig::read(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error_but_load_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "preferred_helper = \"xmessage\"").unwrap();
        assert!(matches!(
            DialogConfig::read(&path),
            Err(crate::errors::DialogError::ConfigParse(_))
        ));
        assert_eq!(DialogConfig::load_from_path(path), DialogConfig::default());
    }
}
