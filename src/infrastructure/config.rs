//! Configuration management

use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What reading unparseable diary data does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Log the problem and behave as if the diary were empty
    #[default]
    Empty,
    /// Fail with `DaybookError::CorruptData`
    Error,
}

impl CorruptDataPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorruptDataPolicy::Empty => "empty",
            CorruptDataPolicy::Error => "error",
        }
    }
}

impl FromStr for CorruptDataPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(CorruptDataPolicy::Empty),
            "error" => Ok(CorruptDataPolicy::Error),
            _ => Err(format!(
                "Invalid corrupt_data policy: '{}'. Valid values are: empty, error",
                s
            )),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default)]
    pub corrupt_data: CorruptDataPolicy,
    /// Run the legacy tag migration every time the diary is opened
    #[serde(default = "default_true")]
    pub migrate_on_open: bool,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            corrupt_data: CorruptDataPolicy::default(),
            migrate_on_open: true,
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daybook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(".daybook");
        let config_path = daybook_dir.join("config.toml");

        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert!(!config.editor.is_empty());
        assert_eq!(config.corrupt_data, CorruptDataPolicy::Empty);
        assert!(config.migrate_on_open);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.corrupt_data = CorruptDataPolicy::Error;
        config.migrate_on_open = false;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".daybook/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.corrupt_data, CorruptDataPolicy::Error);
        assert!(!loaded.migrate_on_open);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();
        fs::write(
            temp.path().join(".daybook/config.toml"),
            "editor = \"vim\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, "vim");
        assert_eq!(loaded.corrupt_data, CorruptDataPolicy::Empty);
        assert!(loaded.migrate_on_open);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            DaybookError::NotDaybookDirectory(_) => {}
            other => panic!("Expected NotDaybookDirectory error, got {}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();
        fs::write(temp.path().join(".daybook/config.toml"), "corrupt_data = 3").unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(matches!(err, DaybookError::TomlDeserialize(_)));
        assert!(err.to_string().starts_with("Failed to parse config.toml"));
    }

    #[test]
    fn test_corrupt_data_policy_from_str() {
        assert_eq!(
            "Error".parse::<CorruptDataPolicy>().unwrap(),
            CorruptDataPolicy::Error
        );
        assert_eq!(
            "empty".parse::<CorruptDataPolicy>().unwrap(),
            CorruptDataPolicy::Empty
        );
        assert!("ignore".parse::<CorruptDataPolicy>().is_err());
    }

    #[test]
    fn test_get_editor_is_never_empty() {
        let config = Config {
            editor: "default-editor".to_string(),
            ..Config::new()
        };
        assert!(!config.get_editor().is_empty());
    }
}
