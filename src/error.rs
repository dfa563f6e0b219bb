//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Duplicate entry id: {0}")]
    DuplicateEntryId(String),

    #[error("Stored diary data is corrupt: {0}")]
    CorruptData(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::InvalidDateReference(_) => 3,
            DaybookError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to create a new diary\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DaybookError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • in 3 days, 10 days ago\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    daybook write --title 'Trip' --date 'next saturday'\n\
                    daybook list --from 2025-01-01",
                    ref_str
                )
            }
            DaybookError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see entry ids\n\
                    • Use 'daybook search <text>' to find an entry by its title or content",
                    id
                )
            }
            DaybookError::DuplicateEntryId(id) => {
                format!(
                    "More than one entry has the id '{}'\n\n\
                    Suggestions:\n\
                    • Remove the extra copy from the import file and run the import again\n\
                    • Stored duplicates are dropped automatically on the next change; \
                    the first entry with each id is kept",
                    id
                )
            }
            DaybookError::CorruptData(msg) => {
                format!(
                    "Stored diary data is corrupt: {}\n\n\
                    Suggestions:\n\
                    • Restore a previous export: daybook import <file> --yes\n\
                    • Switch to fail-soft reads: daybook config corrupt_data empty",
                    msg
                )
            }
            DaybookError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: daybook config editor 'vim'\n\
                    • Pass the text directly with --content instead",
                    msg
                )
            }
            DaybookError::Config(msg) => {
                if msg.contains("Invalid mood") {
                    format!(
                        "{}\n\n\
                        Valid moods: excited, happy, content, neutral, sad, angry, anxious\n\
                        Example: daybook write --title 'Walk' --mood happy",
                        msg
                    )
                } else if msg.contains("Invalid category") {
                    format!(
                        "{}\n\n\
                        Valid categories: weather, people, school, company, travel, food, dessert, drink\n\
                        Example: daybook write --title 'Lunch' --select food=korean",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_daybook_directory_suggestion() {
        let err = DaybookError::NotDaybookDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("daybook init"));
        assert!(msg.contains("DAYBOOK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_reference_examples() {
        let err = DaybookError::InvalidDateReference("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("days ago"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = DaybookError::EntryNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("daybook list"));
        assert!(msg.contains("daybook search"));
    }

    #[test]
    fn test_corrupt_data_suggestions() {
        let err = DaybookError::CorruptData("expected value at line 1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("daybook import"));
        assert!(msg.contains("corrupt_data empty"));
    }

    #[test]
    fn test_duplicate_entry_id_suggestions() {
        let err = DaybookError::DuplicateEntryId("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("import"));
        assert!(msg.contains("first entry with each id is kept"));
    }

    #[test]
    fn test_config_invalid_mood_suggestions() {
        let err = DaybookError::Config("Invalid mood: 'grumpy'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("excited, happy, content"));
    }

    #[test]
    fn test_config_invalid_category_suggestions() {
        let err = DaybookError::Config("Invalid category: 'music'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("weather, people"));
        assert!(msg.contains("--select food=korean"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            DaybookError::NotDaybookDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(
            DaybookError::InvalidDateReference("x".to_string()).exit_code(),
            3
        );
        assert_eq!(DaybookError::EntryNotFound("x".to_string()).exit_code(), 4);
        assert_eq!(DaybookError::Storage("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DaybookError::Storage("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Storage error: disk full");
    }
}
