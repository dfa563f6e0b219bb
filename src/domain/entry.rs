//! Diary entry model

use crate::domain::id::generate_id;
use crate::domain::tag::Tag;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// How the writer felt about the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excited,
    Happy,
    Content,
    Neutral,
    Sad,
    Angry,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Excited,
        Mood::Happy,
        Mood::Content,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excited => "excited",
            Mood::Happy => "happy",
            Mood::Content => "content",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Excited => "🤩",
            Mood::Happy => "😊",
            Mood::Content => "😌",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Anxious => "😰",
        }
    }

    pub fn group(&self) -> MoodGroup {
        match self {
            Mood::Excited | Mood::Happy | Mood::Content => MoodGroup::Good,
            Mood::Neutral => MoodGroup::Neutral,
            Mood::Sad | Mood::Angry | Mood::Anxious => MoodGroup::Bad,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Valid moods are: excited, happy, content, neutral, sad, angry, anxious",
                    s
                )
            })
    }
}

/// Coarse mood buckets used when searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodGroup {
    Good,
    Neutral,
    Bad,
}

impl FromStr for MoodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(MoodGroup::Good),
            "neutral" => Ok(MoodGroup::Neutral),
            "bad" => Ok(MoodGroup::Bad),
            _ => Err(format!(
                "Invalid mood group: '{}'. Valid groups are: good, neutral, bad",
                s
            )),
        }
    }
}

/// Whether an anticipated event played out as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Realized,
    NotRealized,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Realized => "realized",
            ResultStatus::NotRealized => "not_realized",
        }
    }
}

impl FromStr for ResultStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "realized" => Ok(ResultStatus::Realized),
            "not_realized" => Ok(ResultStatus::NotRealized),
            _ => Err(format!(
                "Invalid result status: '{}'. Valid values are: realized, not_realized",
                s
            )),
        }
    }
}

/// Context selector groups an entry can be annotated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Weather,
    People,
    School,
    Company,
    Travel,
    Food,
    Dessert,
    Drink,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Weather,
        Category::People,
        Category::School,
        Category::Company,
        Category::Travel,
        Category::Food,
        Category::Dessert,
        Category::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weather => "weather",
            Category::People => "people",
            Category::School => "school",
            Category::Company => "company",
            Category::Travel => "travel",
            Category::Food => "food",
            Category::Dessert => "dessert",
            Category::Drink => "drink",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid category: '{}'. Valid categories are: weather, people, school, company, travel, food, dessert, drink",
                    s
                )
            })
    }
}

/// Selected codes per category. Each list behaves as a set in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_weather: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_people: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_school: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_company: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_travel: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_food: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_dessert: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_drink: Vec<String>,
}

impl Selections {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Weather => &self.selected_weather,
            Category::People => &self.selected_people,
            Category::School => &self.selected_school,
            Category::Company => &self.selected_company,
            Category::Travel => &self.selected_travel,
            Category::Food => &self.selected_food,
            Category::Dessert => &self.selected_dessert,
            Category::Drink => &self.selected_drink,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Weather => &mut self.selected_weather,
            Category::People => &mut self.selected_people,
            Category::School => &mut self.selected_school,
            Category::Company => &mut self.selected_company,
            Category::Travel => &mut self.selected_travel,
            Category::Food => &mut self.selected_food,
            Category::Dessert => &mut self.selected_dessert,
            Category::Drink => &mut self.selected_drink,
        }
    }

    /// Add a code; returns false if it was already selected
    pub fn insert(&mut self, category: Category, code: impl Into<String>) -> bool {
        let code = code.into();
        let codes = self.get_mut(category);
        if codes.contains(&code) {
            return false;
        }
        codes.push(code);
        true
    }

    pub fn clear(&mut self, category: Category) {
        self.get_mut(category).clear();
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Non-empty categories with their codes
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, codes)| !codes.is_empty())
    }
}

/// One diary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub selections: Selections,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_status: Option<ResultStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Fields this version does not know about, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiaryEntry {
    /// Create an entry with a fresh id and both timestamps set to now
    pub fn new(title: impl Into<String>, content: impl Into<String>, date: NaiveDate) -> Self {
        let now = Utc::now();
        DiaryEntry {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            date,
            mood: None,
            emoji: None,
            tags: Vec::new(),
            selections: Selections::default(),
            actual_result: None,
            result_status: None,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    pub fn has_legacy_tags(&self) -> bool {
        self.tags.iter().any(Tag::is_legacy)
    }

    /// Whether the entry is dated after `today` (a "future diary" entry)
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.date > today
    }
}

/// Stable sort, most recent entry date first
pub fn sort_by_date_desc(entries: &mut [DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
