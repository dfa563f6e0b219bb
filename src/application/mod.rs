//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod store;
pub mod write_entry;

pub use manage_config::ConfigService;
pub use store::{
    parse_entries, EntryStore, TagMigrationReport, UpsertOutcome, CORRUPT_BACKUP_KEY,
    DIARY_ENTRIES_KEY,
};
pub use write_entry::{edit_entry, parse_selection, write_entry, EntryChanges};
