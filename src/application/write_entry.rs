//! Write and edit entry use cases

use crate::application::store::EntryStore;
use crate::domain::{Category, DiaryEntry, Mood, ResultStatus, Tag, TagInfo};
use crate::error::{DaybookError, Result};
use crate::infrastructure::KeyValueStore;
use chrono::NaiveDate;
use std::str::FromStr;

/// Field changes requested by the caller. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
    pub emoji: Option<String>,
    /// Tag names to add with the default icon and color
    pub add_tags: Vec<String>,
    pub clear_tags: bool,
    pub selections: Vec<(Category, String)>,
    pub clear_selections: bool,
    pub actual_result: Option<String>,
    pub result_status: Option<ResultStatus>,
}

impl EntryChanges {
    pub fn apply(self, entry: &mut DiaryEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
        if self.mood.is_some() {
            entry.mood = self.mood;
        }
        if self.emoji.is_some() {
            entry.emoji = self.emoji;
        }

        if self.clear_tags {
            entry.tags.clear();
        }
        for name in self.add_tags {
            let name = name.trim().trim_start_matches('#').to_string();
            let duplicate = entry.tags.iter().any(|t| t.name().eq_ignore_ascii_case(&name));
            if name.is_empty() || duplicate {
                continue;
            }
            entry.tags.push(Tag::from(TagInfo::with_defaults(name)));
        }

        if self.clear_selections {
            for category in Category::ALL {
                entry.selections.clear(category);
            }
        }
        for (category, code) in self.selections {
            entry.selections.insert(category, code);
        }

        if self.actual_result.is_some() {
            entry.actual_result = self.actual_result;
        }
        if self.result_status.is_some() {
            entry.result_status = self.result_status;
        }
    }
}

/// Parse a `category=code` selector argument
pub fn parse_selection(input: &str) -> Result<(Category, String)> {
    let (category, code) = input.split_once('=').ok_or_else(|| {
        DaybookError::Config(format!(
            "Invalid selection: '{}'. Expected CATEGORY=CODE, e.g. weather=sunny",
            input
        ))
    })?;

    let category = Category::from_str(category).map_err(DaybookError::Config)?;
    let code = code.trim();
    if code.is_empty() {
        return Err(DaybookError::Config(format!(
            "Invalid selection: '{}'. The code after '=' is empty",
            input
        )));
    }

    Ok((category, code.to_string()))
}

/// Create a new entry dated `date` (today when unset) and store it
pub fn write_entry<S: KeyValueStore>(
    store: &EntryStore<S>,
    changes: EntryChanges,
    today: NaiveDate,
) -> Result<DiaryEntry> {
    let title = changes
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            DaybookError::Config("A title is required to write an entry".to_string())
        })?
        .to_string();

    let mut entry = DiaryEntry::new(title, String::new(), changes.date.unwrap_or(today));
    changes.apply(&mut entry);
    entry.title = entry.title.trim().to_string();

    store.upsert(entry.clone())?;
    Ok(entry)
}

/// Apply `changes` to the stored entry with `id` and store the full record again
pub fn edit_entry<S: KeyValueStore>(
    store: &EntryStore<S>,
    id: &str,
    changes: EntryChanges,
) -> Result<DiaryEntry> {
    let mut entry = store
        .get(id)?
        .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))?;

    changes.apply(&mut entry);
    store.upsert(entry)?;

    store
        .get(id)?
        .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))
}
