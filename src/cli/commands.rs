//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Terminal diary with mood, tags and future entries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Entry fields shared by `write` and `edit`
#[derive(Args, Debug, Default)]
pub struct EntryFields {
    /// Entry body text
    #[arg(short, long, conflicts_with = "editor")]
    pub content: Option<String>,

    /// Compose the body in the configured editor
    #[arg(short, long)]
    pub editor: bool,

    /// Entry date (e.g., today, yesterday, next friday, in 3 days, 2025-01-17)
    #[arg(short, long, value_name = "DATE_REF")]
    pub date: Option<String>,

    /// Mood (excited, happy, content, neutral, sad, angry, anxious)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Emoji shown next to the entry
    #[arg(long)]
    pub emoji: Option<String>,

    /// Tag to add (repeatable)
    #[arg(short, long = "tag", value_name = "NAME")]
    pub tags: Vec<String>,

    /// Context selection to add, e.g. weather=sunny (repeatable)
    #[arg(short, long = "select", value_name = "CATEGORY=CODE")]
    pub selections: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write a new entry
    Write {
        /// Entry title
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: EntryFields,

        /// Remove all tags before adding new ones
        #[arg(long)]
        clear_tags: bool,

        /// Remove all selections before adding new ones
        #[arg(long)]
        clear_selections: bool,

        /// What actually happened (for future entries)
        #[arg(long)]
        result: Option<String>,

        /// Outcome status (realized, not_realized)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one entry
    Show {
        /// Entry id
        id: String,
    },

    /// List entries, most recent date first
    List {
        /// Earliest date to include
        #[arg(long, value_name = "DATE_REF")]
        from: Option<String>,

        /// Latest date to include
        #[arg(long, value_name = "DATE_REF")]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search entries by text, mood group, tag and date range
    Search {
        /// Text to look for in title, content, outcome and tags
        text: Option<String>,

        /// Mood group (good, neutral, bad)
        #[arg(short, long)]
        mood: Option<String>,

        /// Tag name
        #[arg(short, long)]
        tag: Option<String>,

        /// Earliest date to include
        #[arg(long, value_name = "DATE_REF")]
        from: Option<String>,

        /// Latest date to include
        #[arg(long, value_name = "DATE_REF")]
        to: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Convert legacy string tags to structured tags
    MigrateTags,

    /// Fill an empty diary with sample entries
    Sample,

    /// Delete every entry
    Wipe {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Print all entries as JSON
    Export,

    /// Replace all entries with the contents of a JSON export
    Import {
        /// Exported JSON file
        file: PathBuf,

        /// Confirm replacing the current entries
        #[arg(long)]
        yes: bool,
    },
}
