//! Search filter over diary entries

use crate::domain::entry::{DiaryEntry, MoodGroup};
use chrono::NaiveDate;

/// Criteria for searching entries. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive text matched against title, content, actual result and tag names
    pub text: Option<String>,
    pub mood_group: Option<MoodGroup>,
    /// Inclusive lower bound on the entry date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date
    pub to: Option<NaiveDate>,
    /// Case-insensitive exact tag name
    pub tag: Option<String>,
}

impl EntryFilter {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn mood_group(mut self, group: MoodGroup) -> Self {
        self.mood_group = Some(group);
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == EntryFilter::default()
    }

    pub fn matches(&self, entry: &DiaryEntry) -> bool {
        if let Some(from) = self.from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.date > to {
                return false;
            }
        }

        if let Some(group) = self.mood_group {
            // Entries without a mood never match a mood filter
            if entry.mood.map(|m| m.group()) != Some(group) {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            if !entry
                .tags
                .iter()
                .any(|t| t.name().eq_ignore_ascii_case(tag.trim_start_matches('#')))
            {
                return false;
            }
        }

        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Self::text_matches(entry, &text.to_lowercase()),
            _ => true,
        }
    }

    fn text_matches(entry: &DiaryEntry, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(entry.title.as_str())
            || contains(entry.content.as_str())
            || entry.actual_result.as_deref().is_some_and(|r| contains(r))
            || entry.tags.iter().any(|t| contains(t.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::Mood;
    use crate::domain::tag::{Tag, TagInfo};

    fn entry(title: &str, content: &str, date: NaiveDate) -> DiaryEntry {
        DiaryEntry::new(title, content, date)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = EntryFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&entry("a", "b", date(2024, 1, 1))));
    }

    #[test]
    fn test_text_matches_title_content_result_and_tags() {
        let mut e = entry("Morning Run", "Five kilometres", date(2024, 1, 1));
        e.actual_result = Some("Beat my best time".to_string());
        e.tags.push(Tag::from(TagInfo::with_defaults("Fitness")));

        assert!(EntryFilter::default().text("run").matches(&e));
        assert!(EntryFilter::default().text("KILOMETRES").matches(&e));
        assert!(EntryFilter::default().text("best time").matches(&e));
        assert!(EntryFilter::default().text("fitness").matches(&e));
        assert!(!EntryFilter::default().text("swim").matches(&e));
        assert!(EntryFilter::default().text("   ").matches(&e));
    }

    #[test]
    fn test_mood_group_filter() {
        let mut e = entry("a", "b", date(2024, 1, 1));
        assert!(!EntryFilter::default().mood_group(MoodGroup::Good).matches(&e));

        e.mood = Some(Mood::Excited);
        assert!(EntryFilter::default().mood_group(MoodGroup::Good).matches(&e));
        assert!(!EntryFilter::default().mood_group(MoodGroup::Bad).matches(&e));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let e = entry("a", "b", date(2024, 3, 10));
        let inside = EntryFilter::default().between(Some(date(2024, 3, 10)), Some(date(2024, 3, 10)));
        let before = EntryFilter::default().between(None, Some(date(2024, 3, 9)));
        let after = EntryFilter::default().between(Some(date(2024, 3, 11)), None);

        assert!(inside.matches(&e));
        assert!(!before.matches(&e));
        assert!(!after.matches(&e));
    }

    #[test]
    fn test_tag_filter_accepts_legacy_and_hash_prefix() {
        let mut e = entry("a", "b", date(2024, 1, 1));
        e.tags.push(Tag::Legacy("Work".to_string()));

        assert!(EntryFilter::default().tag("#work").matches(&e));
        assert!(!EntryFilter::default().tag("home").matches(&e));
    }
}
