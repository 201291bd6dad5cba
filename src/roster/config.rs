use crate::error::{Result, RosterError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for roster, stored as JSON in the user config dir
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Colorize messages when stdout is a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// `tracing` filter directive used when `ROSTER_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl RosterConfig {
    /// `<user config dir>/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }
        if path.is_dir() {
            return Err(RosterError::Config(format!(
                "{} is a directory, expected a {} file",
                path.display(),
                CONFIG_FILENAME
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
