//! Optional `cranio.toml` configuration.
//!
//! ```toml
//! [schedule]
//! active_overdue_days = 7
//!
//! [output]
//! json = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::schedule::DEFAULT_ACTIVE_OVERDUE_DAYS;

pub const DEFAULT_CONFIG_FILE: &str = "cranio.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Overdue tasks older than this many days leave the active view.
    pub active_overdue_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            active_overdue_days: DEFAULT_ACTIVE_OVERDUE_DAYS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given (must exist), else `cranio.toml` in `dir` if
    /// present, else defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml(&path, &content)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
