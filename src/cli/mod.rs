//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, EntryFields};
pub use output::{format_entry_detail, format_entry_list, format_migration_report};
