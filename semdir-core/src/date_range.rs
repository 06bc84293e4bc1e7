//! Inclusive date range for occurrence generation.

use chrono::NaiveDate;

use crate::error::{SemdirError, SemdirResult};

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting an end before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> SemdirResult<Self> {
        if end < start {
            return Err(SemdirError::DateOrder { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parse `YYYY-MM-DD` boundary strings into a validated range.
    pub fn from_args(from: &str, to: &str) -> SemdirResult<Self> {
        Self::new(parse_iso_date(from)?, parse_iso_date(to)?)
    }

    /// Every date in the range, ascending. Each step derives a new date
    /// value instead of mutating one in place.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        std::iter::successors(Some(self.start), move |d| {
            d.succ_opt().filter(|next| *next <= self.end)
        })
    }
}

/// Parse a strict `YYYY-MM-DD` token that names a real calendar date.
pub fn parse_iso_date(s: &str) -> SemdirResult<NaiveDate> {
    if !is_iso_shape(s) {
        return Err(SemdirError::BadDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SemdirError::BadDate(s.to_string()))
}

/// Exactly 4-2-2 digits with dashes; chrono alone would accept unpadded forms.
fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn rejects_end_before_start() {
        let err = DateRange::new(date("2025-09-08"), date("2025-09-01")).unwrap_err();
        assert!(matches!(err, SemdirError::DateOrder { .. }));

        let err = DateRange::from_args("2025-09-08", "2025-09-01").unwrap_err();
        assert!(matches!(err, SemdirError::DateOrder { .. }));
    }

    #[test]
    fn from_args_parses_boundaries() {
        let range = DateRange::from_args("2025-09-01", "2025-12-19").unwrap();
        assert_eq!(range.start, date("2025-09-01"));
        assert_eq!(range.end, date("2025-12-19"));
    }

    #[test]
    fn rejects_loose_date_tokens() {
        assert!(matches!(
            parse_iso_date("2025-9-1").unwrap_err(),
            SemdirError::BadDate(ref t) if t == "2025-9-1"
        ));
        assert!(parse_iso_date("20250901").is_err());
        assert!(parse_iso_date("2025-09-01T00").is_err());
        // Right shape, impossible date
        assert!(parse_iso_date("2025-02-30").is_err());
    }

    #[test]
    fn days_are_inclusive_and_ascending() {
        let range = DateRange::from_args("2025-09-01", "2025-09-04").unwrap();
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date("2025-09-01"),
                date("2025-09-02"),
                date("2025-09-03"),
                date("2025-09-04"),
            ]
        );
    }

    #[test]
    fn single_day_range_yields_one_day() {
        let range = DateRange::from_args("2025-09-01", "2025-09-01").unwrap();
        assert_eq!(range.days().count(), 1);
    }
}
