//! Holiday list parsing.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date_range::parse_iso_date;
use crate::error::{SemdirError, SemdirResult};

/// Parse a comma-separated list of `YYYY-MM-DD` dates to exclude.
///
/// Empty or whitespace-only input yields an empty set. Duplicate dates
/// collapse silently; any other malformed token fails the whole parse.
pub fn parse_holidays(input: &str) -> SemdirResult<BTreeSet<NaiveDate>> {
    let mut days = BTreeSet::new();

    if input.trim().is_empty() {
        return Ok(days);
    }

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let date =
            parse_iso_date(token).map_err(|_| SemdirError::BadHoliday(token.to_string()))?;
        days.insert(date);
    }

    Ok(days)
}
