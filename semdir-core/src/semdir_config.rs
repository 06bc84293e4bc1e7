//! Global semdir configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SemdirError, SemdirResult};

/// Global configuration at ~/.config/semdir/config.toml
///
/// Everything here is a default; command-line flags override it.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct SemdirConfig {
    /// Timetable file used when no path is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetable: Option<PathBuf>,

    /// Folder pattern used when --pattern is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Comma-separated YYYY-MM-DD dates excluded from every plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<String>,
}

impl SemdirConfig {
    pub fn config_path() -> SemdirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SemdirError::Config("Could not determine config directory".into()))?
            .join("semdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/semdir/config.toml
    pub fn save(&self) -> SemdirResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| SemdirError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| SemdirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> SemdirResult<()> {
        let contents = "\
# semdir configuration

# Timetable used when no file is passed on the command line:
# timetable = \"~/semester/timetable.txt\"

# Folder pattern ({SUBJECT} {WEEK} {WEEK2} {WEEKDAY_KO} {YYYY} {MM} {DD}):
# pattern = \"{SUBJECT}/주차{WEEK2}/{WEEKDAY_KO}_{MM}-{DD}\"

# Dates to skip in every plan, comma-separated:
# holidays = \"2025-10-03, 2025-10-09\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SemdirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SemdirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses_to_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        SemdirConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: SemdirConfig = toml::from_str(&content).unwrap();
        assert!(config.timetable.is_none());
        assert!(config.pattern.is_none());
        assert!(config.holidays.is_none());
    }

    #[test]
    fn create_default_config_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        SemdirConfig::create_default_config(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = SemdirConfig {
            timetable: Some(PathBuf::from("~/semester/timetable.txt")),
            pattern: Some("{SUBJECT}/{WEEK}".to_string()),
            holidays: None,
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: SemdirConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.timetable, config.timetable);
        assert_eq!(parsed.pattern, config.pattern);
        assert!(parsed.holidays.is_none());
    }
}
