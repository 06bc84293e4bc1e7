//! Folder-path patterns.
//!
//! A pattern is a plain string with `{TOKEN}` placeholders resolved once per
//! occurrence. Unrecognized placeholders pass through untouched so callers
//! can spot a typo in the output instead of getting a hard error.

use chrono::{Datelike, NaiveDate};

use crate::error::SemdirResult;
use crate::expand::Occurrence;
use crate::week::week_number;

/// Pattern used when none is configured: subject / week / weekday_month-day.
pub const DEFAULT_PATTERN: &str = "{SUBJECT}/주차{WEEK2}/{WEEKDAY_KO}_{MM}-{DD}";

/// Resolve every recognized placeholder in `pattern` for one occurrence.
///
/// `{MM}`, `{DD}` and `{WEEK2}` are zero-padded to 2 digits; `{WEEK}` and
/// `{YYYY}` are unpadded.
pub fn resolve(
    pattern: &str,
    occurrence: &Occurrence,
    semester_start: NaiveDate,
) -> SemdirResult<String> {
    let date = occurrence.date;
    let week = week_number(semester_start, date)?;

    Ok(pattern
        .replace("{YYYY}", &date.year().to_string())
        .replace("{MM}", &format!("{:02}", date.month()))
        .replace("{DD}", &format!("{:02}", date.day()))
        .replace("{WEEKDAY_KO}", occurrence.entry.weekday.label_ko())
        .replace("{SUBJECT}", &occurrence.entry.subject)
        .replace("{WEEK}", &week.to_string())
        .replace("{WEEK2}", &format!("{:02}", week)))
}

/// Normalize a resolved pattern into a folder path: backslashes become
/// forward slashes, leading and trailing slashes are stripped. Callers must
/// skip paths that come back empty instead of creating a nameless folder.
pub fn normalize_path(resolved: &str) -> String {
    resolved.replace('\\', "/").trim_matches('/').to_string()
}
