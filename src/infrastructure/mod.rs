//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod kv;
pub mod repository;

pub use config::{Config, CorruptDataPolicy};
pub use editor::EditorSession;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{DiaryRepository, FileSystemRepository};
