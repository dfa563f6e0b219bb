//! daybook - Terminal diary application
//!
//! Keeps diary entries (mood, tags, context selections and future entries with their
//! outcomes) as a single JSON collection in a key-value backend.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
