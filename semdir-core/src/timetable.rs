//! Timetable text parsing.
//!
//! A timetable is line-oriented text: blank lines and `#` comments are
//! skipped, and every other line must be `subject, weekday, start-end`.
//! Parsing is all-or-nothing: the first bad line aborts with its error.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SemdirError, SemdirResult};

/// Day of the week a class meets on, encoded Mon=0..Sun=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Parse one of the 14 recognized labels (short and long Korean forms).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "월" | "월요일" => Some(Weekday::Mon),
            "화" | "화요일" => Some(Weekday::Tue),
            "수" | "수요일" => Some(Weekday::Wed),
            "목" | "목요일" => Some(Weekday::Thu),
            "금" | "금요일" => Some(Weekday::Fri),
            "토" | "토요일" => Some(Weekday::Sat),
            "일" | "일요일" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// Short Korean label, as used in folder patterns.
    pub fn label_ko(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
            Weekday::Sat => "토",
            Weekday::Sun => "일",
        }
    }

    /// Days from Monday, same encoding chrono uses for calendar dates.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Whether `date` falls on this weekday.
    pub fn matches(self, date: NaiveDate) -> bool {
        date.weekday().num_days_from_monday() == self.index()
    }
}

/// Wall-clock time of day, minute precision.
///
/// The derived ordering is hour-then-minute, which is minute-of-day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One weekly recurring class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub weekday: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Parse raw timetable text into entries, in line order.
pub fn parse_entries(text: &str) -> SemdirResult<Vec<ScheduleEntry>> {
    let mut entries = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(SemdirError::MalformedLine(line.to_string()));
        }

        let subject = parts[0];
        if subject.is_empty() {
            return Err(SemdirError::EmptySubject(line.to_string()));
        }

        let weekday = Weekday::from_label(parts[1])
            .ok_or_else(|| SemdirError::UnknownWeekday(parts[1].to_string()))?;

        let span = parts[2];
        let Some((start_token, end_token)) = span.split_once('-') else {
            return Err(SemdirError::BadTimeSpan(span.to_string()));
        };
        let start = parse_time(start_token)?;
        let end = parse_time(end_token)?;
        if end <= start {
            return Err(SemdirError::TimeOrder(span.to_string()));
        }

        entries.push(ScheduleEntry {
            subject: subject.to_string(),
            weekday,
            start,
            end,
        });
    }

    Ok(entries)
}

/// Parse a single time token: `HH:MM`, or compact `HHMM`/`HMM`.
pub fn parse_time(token: &str) -> SemdirResult<TimeOfDay> {
    let s = token.trim();

    let (hour, minute) = if let Some((h, m)) = s.split_once(':') {
        let hour: u8 = h
            .trim()
            .parse()
            .map_err(|_| SemdirError::BadTime(s.to_string()))?;
        let minute: u8 = m
            .trim()
            .parse()
            .map_err(|_| SemdirError::BadTime(s.to_string()))?;
        (hour, minute)
    } else {
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(SemdirError::BadTime(s.to_string()));
        }
        // Compact form: the minute is always the last two digits
        let split = match s.len() {
            4 => 2,
            3 => 1,
            _ => return Err(SemdirError::BadTime(s.to_string())),
        };
        let hour: u8 = s[..split]
            .parse()
            .map_err(|_| SemdirError::BadTime(s.to_string()))?;
        let minute: u8 = s[split..]
            .parse()
            .map_err(|_| SemdirError::BadTime(s.to_string()))?;
        (hour, minute)
    };

    if hour > 23 || minute > 59 {
        return Err(SemdirError::TimeOutOfRange(s.to_string()));
    }

    Ok(TimeOfDay { hour, minute })
}
