//! Loading the global configuration and resolving its defaults.

use std::path::PathBuf;

use config::{Config, File};

use crate::error::{SemdirError, SemdirResult};
use crate::pattern::DEFAULT_PATTERN;
use crate::semdir_config::SemdirConfig;

#[derive(Clone)]
pub struct Semdir {
    config: SemdirConfig,
}

impl Semdir {
    pub fn load() -> SemdirResult<Self> {
        let config_path = SemdirConfig::config_path()?;

        if !config_path.exists() {
            SemdirConfig::create_default_config(&config_path)?;
        }

        let config: SemdirConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| SemdirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SemdirError::Config(e.to_string()))?;

        Ok(Semdir { config })
    }

    /// Configured timetable path with `~` expanded, if one is set.
    pub fn timetable_path(&self) -> Option<PathBuf> {
        let configured = self.config.timetable.as_ref()?;
        let expanded = shellexpand::tilde(&configured.to_string_lossy()).into_owned();
        Some(PathBuf::from(expanded))
    }

    /// Configured pattern, falling back to the built-in default.
    pub fn pattern(&self) -> &str {
        self.config.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// Configured holiday list; empty when unset.
    pub fn holidays(&self) -> &str {
        self.config.holidays.as_deref().unwrap_or("")
    }
}
