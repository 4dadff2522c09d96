// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Stored as TOML, by default in `<config dir>/tgl/config.toml`:
//!
//! ```toml
//! [datetime]
//! timezone = "+02:00"   # or "local", "utc"
//! day_first = true
//! year_first = false
//!
//! [resolve]
//! fields = ["id", "name"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tgl_core::{DateTimeSettings, LookupFields};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "tgl";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub datetime: DateTimeSettings,
    pub resolve: ResolveConfig,
}

/// Entity resolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Fields tried in order when resolving an entity argument.
    pub fields: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            fields: LookupFields::default().as_slice().to_vec(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::ConfigNotFound(path.display().to_string()));
            }
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to the given file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured lookup field list.
    pub fn lookup_fields(&self) -> Result<LookupFields> {
        Ok(LookupFields::new(self.resolve.fields.iter().cloned())?)
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
