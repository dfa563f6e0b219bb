//! Entry tags and the legacy tag migration

use serde::{Deserialize, Serialize};

/// Icon given to tags converted from the bare-label form
pub const DEFAULT_TAG_ICON: &str = "🏷️";

/// Color given to tags converted from the bare-label form
pub const DEFAULT_TAG_COLOR: &str = "#6c757d";

/// Structured tag record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl TagInfo {
    /// Tag with the default icon and color
    pub fn with_defaults(name: impl Into<String>) -> Self {
        TagInfo {
            name: name.into(),
            icon: DEFAULT_TAG_ICON.to_string(),
            color: DEFAULT_TAG_COLOR.to_string(),
        }
    }
}

/// A tag as stored on an entry.
///
/// Older data stores tags as bare strings; both shapes are accepted on read and written back
/// as they are until [`migrate_tags`] narrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Legacy(String),
    Structured(TagInfo),
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Legacy(name) => name,
            Tag::Structured(info) => &info.name,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Tag::Legacy(_))
    }
}

impl From<TagInfo> for Tag {
    fn from(info: TagInfo) -> Self {
        Tag::Structured(info)
    }
}

/// Rewrite every legacy tag into the structured form, in place.
///
/// Returns how many tags were converted; structured tags are left untouched.
pub fn migrate_tags(tags: &mut [Tag]) -> usize {
    let mut converted = 0;

    for tag in tags.iter_mut() {
        if let Tag::Legacy(name) = tag {
            *tag = Tag::Structured(TagInfo::with_defaults(std::mem::take(name)));
            converted += 1;
        }
    }

    converted
}
