//! File system repository

use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that marks a diary root
pub const DAYBOOK_DIR: &str = ".daybook";

/// Abstract repository for diary directory operations
pub trait DiaryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .daybook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daybook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daybook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .daybook directory structure
    fn initialize(&self) -> Result<()>;

    /// Key-value backend holding the diary blobs
    fn data_store(&self) -> FileStore;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the diary root.
    /// First checks DAYBOOK_ROOT environment variable, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DaybookError::Config(format!(
                    "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                    Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_daybook_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DaybookError::NotDaybookDirectory(start.to_path_buf()))
    }

    fn has_daybook_dir(path: &Path) -> bool {
        path.join(DAYBOOK_DIR).is_dir()
    }

    fn data_dir(&self) -> PathBuf {
        self.root.join(DAYBOOK_DIR).join("data")
    }
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let daybook_dir = self.root.join(DAYBOOK_DIR);

        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&daybook_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }

    fn data_store(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::KeyValueStore;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_creates_daybook_and_data_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".daybook").is_dir());
        assert!(temp.path().join(".daybook/data").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_data_store_writes_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.data_store().set("DIARY_ENTRIES", "[]").unwrap();

        assert!(temp.path().join(".daybook/data/DIARY_ENTRIES.json").exists());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_daybook() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            DaybookError::NotDaybookDirectory(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotDaybookDirectory error, got {}", other),
        }
    }

    #[test]
    fn test_discover_with_daybook_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("DAYBOOK_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();

        std::env::set_var("DAYBOOK_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_daybook_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("DAYBOOK_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("DAYBOOK_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            DaybookError::Config(msg) => assert!(msg.contains("no .daybook directory")),
            other => panic!("Expected Config error, got {}", other),
        }
    }
}
