//! Domain layer - Diary entries and the rules over them

pub mod date_ref;
pub mod entry;
pub mod filter;
pub mod id;
pub mod sample;
pub mod tag;

pub use date_ref::{resolve_date, DateReference};
pub use entry::{sort_by_date_desc, Category, DiaryEntry, Mood, MoodGroup, ResultStatus, Selections};
pub use filter::EntryFilter;
pub use id::generate_id;
pub use sample::sample_entries;
pub use tag::{migrate_tags, Tag, TagInfo, DEFAULT_TAG_COLOR, DEFAULT_TAG_ICON};
