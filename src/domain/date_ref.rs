//! Date references for entry dates and search ranges

use crate::error::{DaybookError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

/// Which occurrence of a weekday a reference means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayDirection {
    /// Today if it matches, otherwise the most recent one
    Recent,
    /// Strictly before today
    Last,
    /// Strictly after today
    Next,
}

/// A user-supplied date, absolute or relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Signed day offset from today; `today` is 0, `yesterday` is -1
    Days(i64),
    Weekday(Weekday, WeekdayDirection),
    Specific(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || DaybookError::InvalidDateReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Days(0)),
            "yesterday" => return Ok(DateReference::Days(-1)),
            "tomorrow" => return Ok(DateReference::Days(1)),
            _ => {}
        }

        if let Ok(weekday) = Weekday::from_str(&normalized) {
            return Ok(DateReference::Weekday(weekday, WeekdayDirection::Recent));
        }
        if let Some(rest) = normalized.strip_prefix("last ") {
            let weekday = Weekday::from_str(rest.trim()).map_err(|_| invalid())?;
            return Ok(DateReference::Weekday(weekday, WeekdayDirection::Last));
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            let weekday = Weekday::from_str(rest.trim()).map_err(|_| invalid())?;
            return Ok(DateReference::Weekday(weekday, WeekdayDirection::Next));
        }

        // "in 3 days" / "3 days ago"
        if let Some(rest) = normalized.strip_prefix("in ") {
            return Self::parse_day_count(rest)
                .map(DateReference::Days)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_suffix(" ago") {
            return Self::parse_day_count(rest)
                .and_then(i64::checked_neg)
                .map(DateReference::Days)
                .ok_or_else(invalid);
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(DateReference::Specific)
            .map_err(|_| invalid())
    }

    fn parse_day_count(text: &str) -> Option<i64> {
        let (count, unit) = text.trim().split_once(' ')?;
        match unit.trim() {
            "day" | "days" => count.parse().ok(),
            "week" | "weeks" => count.parse::<i64>().ok()?.checked_mul(7),
            _ => None,
        }
    }

    /// Resolve against `today`. `None` when the result falls outside the supported date range.
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        let offset = match *self {
            DateReference::Days(offset) => offset,
            DateReference::Weekday(weekday, direction) => {
                weekday_offset(today.weekday(), weekday, direction)
            }
            DateReference::Specific(date) => return Some(date),
        };
        today.checked_add_signed(Duration::try_days(offset)?)
    }
}

fn weekday_offset(current: Weekday, target: Weekday, direction: WeekdayDirection) -> i64 {
    let back = (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    let forward = (target.num_days_from_monday() + 7 - current.num_days_from_monday()) % 7;

    match direction {
        WeekdayDirection::Recent => -(back as i64),
        WeekdayDirection::Last if back == 0 => -7,
        WeekdayDirection::Last => -(back as i64),
        WeekdayDirection::Next if forward == 0 => 7,
        WeekdayDirection::Next => forward as i64,
    }
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    DateReference::parse(input)?
        .resolve(today)
        .ok_or_else(|| DaybookError::InvalidDateReference(input.to_string()))
}
