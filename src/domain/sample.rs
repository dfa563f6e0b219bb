//! Illustrative entries for a fresh diary
//!
//! The set covers past entries with recorded outcomes, three entries for today and a few
//! "future diary" entries written ahead of the event.

use crate::domain::entry::{Category, DiaryEntry, Mood, ResultStatus};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

/// When a sample entry is dated, relative to today
#[derive(Debug, Clone, Copy)]
enum SampleDate {
    /// Fixed month/day in the year `n` years back
    YearsAgo(i32, u32, u32),
    /// Given day of the month `n` months back
    MonthsAgo(u32, u32),
    Today,
    DaysAhead(i64),
    MonthsAhead(u32),
}

impl SampleDate {
    fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            SampleDate::YearsAgo(years, month, day) => {
                NaiveDate::from_ymd_opt(today.year() - years, month, day)
            }
            SampleDate::MonthsAgo(months, day) => today
                .checked_sub_months(Months::new(months))
                .and_then(|d| d.with_day(day)),
            SampleDate::Today => Some(today),
            SampleDate::DaysAhead(days) => today.checked_add_signed(Duration::days(days)),
            SampleDate::MonthsAhead(months) => today.checked_add_months(Months::new(months)),
        }
    }

    fn is_past(self) -> bool {
        matches!(self, SampleDate::YearsAgo(..) | SampleDate::MonthsAgo(..))
    }
}

struct Sample {
    when: SampleDate,
    title: &'static str,
    content: &'static str,
    mood: Mood,
    selections: &'static [(Category, &'static str)],
    outcome: Option<(&'static str, ResultStatus)>,
}

const SAMPLES: &[Sample] = &[
    Sample {
        when: SampleDate::YearsAgo(2, 3, 15),
        title: "First job interview",
        content: "Went to the interview at the company I always wanted to work for. \
                  I was nervous but went over my prepared answers once more and gave it my best.",
        mood: Mood::Anxious,
        selections: &[(Category::Company, "meeting"), (Category::People, "alone")],
        outcome: Some((
            "I got the offer! The preparation paid off and the interviewers were kind.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::YearsAgo(2, 8, 20),
        title: "Island trip with friends",
        content: "Travelled to the island with university friends. Good food, a beautiful sea \
                  and a few days without any worries.",
        mood: Mood::Excited,
        selections: &[
            (Category::Travel, "airplane"),
            (Category::People, "friends"),
            (Category::Food, "korean"),
        ],
        outcome: Some((
            "It was cloudy, but we had a great time and even climbed the mountain.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::YearsAgo(2, 11, 8),
        title: "Aiming for 900 on the language test",
        content: "Studied a hundred words a day and practised listening every evening to break 900.",
        mood: Mood::Content,
        selections: &[(Category::People, "alone")],
        outcome: Some((
            "Scored 870. Short of the goal, but 200 points better than last time.",
            ResultStatus::NotRealized,
        )),
    },
    Sample {
        when: SampleDate::YearsAgo(1, 5, 10),
        title: "Starting a new hobby",
        content: "Started yoga for body and mind, and to manage stress. The plan is three times a week.",
        mood: Mood::Content,
        selections: &[(Category::People, "alone")],
        outcome: Some((
            "Hard at first, but now I love it. More flexible and calmer, and still going.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::YearsAgo(1, 10, 5),
        title: "A special family dinner",
        content: "The whole family got together for the first time in a while. \
                  Moments like this are precious.",
        mood: Mood::Happy,
        selections: &[(Category::People, "family"), (Category::Food, "korean")],
        outcome: Some((
            "A warm evening. We talked a lot and understood each other better.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::YearsAgo(1, 12, 12),
        title: "Joining a new project",
        content: "Assigned to an important new project at work. A new stack to learn and a lot of \
                  responsibility, but a good chance to grow.",
        mood: Mood::Anxious,
        selections: &[(Category::Company, "project"), (Category::People, "acquaintance")],
        outcome: Some((
            "Tough, but we shipped it. Learned a lot and was reminded how much teamwork matters.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::MonthsAgo(2, 18),
        title: "Preparing a big presentation",
        content: "I have to present in front of a large audience at work. Nervous, so I prepared hard.",
        mood: Mood::Anxious,
        selections: &[
            (Category::Company, "presentation"),
            (Category::People, "acquaintance"),
        ],
        outcome: Some((
            "Went better than expected. Took it step by step and got good feedback.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::MonthsAgo(1, 5),
        title: "Trying a new cafe",
        content: "Visited the cafe a friend recommended. Lovely interior, great coffee and quiet \
                  enough to read.",
        mood: Mood::Happy,
        selections: &[
            (Category::People, "friends"),
            (Category::Drink, "coffee"),
            (Category::Weather, "sunny"),
        ],
        outcome: Some((
            "Found a new favourite place. Grateful to my friend.",
            ResultStatus::Realized,
        )),
    },
    Sample {
        when: SampleDate::Today,
        title: "A day of new beginnings",
        content: "Started the day with a fresh mindset and spent the time more meaningfully than \
                  usual. Small changes add up.",
        mood: Mood::Content,
        selections: &[(Category::People, "alone"), (Category::Weather, "sunny")],
        outcome: None,
    },
    Sample {
        when: SampleDate::Today,
        title: "Lunch with colleagues",
        content: "Tried the new pasta place with colleagues at lunch. Forgot about work stress for \
                  a while.",
        mood: Mood::Happy,
        selections: &[
            (Category::People, "acquaintance"),
            (Category::Food, "western"),
            (Category::Company, "work"),
        ],
        outcome: None,
    },
    Sample {
        when: SampleDate::Today,
        title: "Evening workout and a healthy dinner",
        content: "Thirty minutes on the treadmill and an hour of weights, then a homemade salad. \
                  Body and mind feel lighter.",
        mood: Mood::Content,
        selections: &[
            (Category::People, "alone"),
            (Category::Food, "western"),
            (Category::Weather, "cloudy"),
        ],
        outcome: None,
    },
    Sample {
        when: SampleDate::DaysAhead(7),
        title: "Weekend hike",
        content: "Climbed the mountain with friends. Clear skies, and the whole city was visible \
                  from the top.",
        mood: Mood::Happy,
        selections: &[(Category::People, "friends"), (Category::Weather, "sunny")],
        outcome: None,
    },
    Sample {
        when: SampleDate::DaysAhead(14),
        title: "Reading at the new cafe",
        content: "Read a book at the cafe that opened nearby. Cosy and peaceful. I want more \
                  afternoons like this.",
        mood: Mood::Content,
        selections: &[(Category::People, "alone"), (Category::Drink, "coffee")],
        outcome: None,
    },
    Sample {
        when: SampleDate::MonthsAhead(1),
        title: "Family trip to the coast",
        content: "Three days by the sea with the family: walks on the beach and plenty of local food.",
        mood: Mood::Excited,
        selections: &[
            (Category::People, "family"),
            (Category::Travel, "train"),
            (Category::Food, "korean"),
            (Category::Weather, "sunny"),
        ],
        outcome: None,
    },
];

/// Build the sample entries relative to `today`. Ids are freshly generated.
pub fn sample_entries(today: NaiveDate, now: DateTime<Utc>) -> Vec<DiaryEntry> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let date = sample.when.resolve(today)?;
            let mut entry = DiaryEntry::new(sample.title, sample.content, date);
            entry.mood = Some(sample.mood);

            for (category, code) in sample.selections {
                entry.selections.insert(*category, *code);
            }

            if let Some((result, status)) = sample.outcome {
                entry.actual_result = Some(result.to_string());
                entry.result_status = Some(status);
            }

            // Past samples look as if they were written on the day
            let stamp = if sample.when.is_past() {
                date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()).unwrap_or(now)
            } else {
                now
            };
            entry.created_at = stamp;
            entry.updated_at = stamp;

            Some(entry)
        })
        .collect()
}
