//! Week numbering from the semester start.

use chrono::NaiveDate;

use crate::error::{SemdirError, SemdirResult};

/// 1-indexed week number of `date`, counted from `semester_start`.
///
/// Weeks are left-closed 7-day buckets starting exactly at the semester
/// start. Dates before the start are rejected rather than mapped to a
/// non-positive week.
pub fn week_number(semester_start: NaiveDate, date: NaiveDate) -> SemdirResult<u32> {
    let days = (date - semester_start).num_days();
    if days < 0 {
        return Err(SemdirError::BeforeSemesterStart {
            date,
            semester_start,
        });
    }
    Ok((days / 7) as u32 + 1)
}
