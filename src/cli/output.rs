//! Output formatting utilities

use crate::application::TagMigrationReport;
use crate::domain::{DiaryEntry, Tag};
use chrono::NaiveDate;

fn mood_marker(entry: &DiaryEntry) -> &str {
    match (&entry.emoji, entry.mood) {
        (Some(emoji), _) => emoji,
        (None, Some(mood)) => mood.emoji(),
        (None, None) => " ",
    }
}

fn format_tag(tag: &Tag) -> String {
    match tag {
        Tag::Legacy(name) => format!("#{}", name),
        Tag::Structured(info) => format!("{} #{}", info.icon, info.name),
    }
}

/// Format a list of entries for display, one line each
pub fn format_entry_list(entries: &[DiaryEntry], today: NaiveDate) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let future = if entry.is_future(today) { " (future)" } else { "" };
        output.push_str(&format!(
            "{}  {}  {}{}  [{}]\n",
            entry.date.format("%d-%m-%Y"),
            mood_marker(entry),
            entry.title,
            future,
            entry.id
        ));
    }
    output
}

/// Format one entry with all of its fields
pub fn format_entry_detail(entry: &DiaryEntry) -> String {
    let mut output = format!("{} {}\n", mood_marker(entry), entry.title);
    output.push_str(&format!("Date:    {}\n", entry.date.format("%Y-%m-%d")));
    if let Some(mood) = entry.mood {
        output.push_str(&format!("Mood:    {}\n", mood));
    }
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(format_tag).collect();
        output.push_str(&format!("Tags:    {}\n", tags.join(", ")));
    }
    for (category, codes) in entry.selections.iter() {
        let label = format!("{}:", category.as_str());
        output.push_str(&format!("{:<8} {}\n", label, codes.join(", ")));
    }
    output.push_str(&format!("Id:      {}\n", entry.id));

    if !entry.content.is_empty() {
        output.push('\n');
        output.push_str(&entry.content);
        output.push('\n');
    }

    if entry.actual_result.is_some() || entry.result_status.is_some() {
        output.push('\n');
        if let Some(status) = entry.result_status {
            output.push_str(&format!("Outcome: {}\n", status.as_str()));
        }
        if let Some(result) = &entry.actual_result {
            output.push_str(result);
            output.push('\n');
        }
    }
    output
}

/// Summarize a tag migration run
pub fn format_migration_report(report: &TagMigrationReport) -> String {
    if !report.changed() {
        return format!("No legacy tags found in {} entries", report.scanned_entries);
    }
    format!(
        "Migrated {} tags in {} of {} entries",
        report.migrated_tags, report.migrated_entries, report.scanned_entries
    )
}
