//! Config management use case

use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, CorruptDataPolicy, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "corrupt_data" => Ok(config.corrupt_data.as_str().to_string()),
            "migrate_on_open" => Ok(config.migrate_on_open.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, corrupt_data, migrate_on_open, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "corrupt_data" => {
                config.corrupt_data =
                    CorruptDataPolicy::from_str(value).map_err(DaybookError::Config)?;
            }
            "migrate_on_open" => {
                config.migrate_on_open = value.trim().parse().map_err(|_| {
                    DaybookError::Config(format!(
                        "Invalid value for migrate_on_open: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(DaybookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, corrupt_data, migrate_on_open",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
