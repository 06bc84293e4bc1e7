//! Occurrence expansion.
//!
//! Expands weekly entries into concrete dated occurrences within a range,
//! skipping holidays. Expansion is pure: the same inputs always produce the
//! same sequence.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_range::DateRange;
use crate::timetable::ScheduleEntry;

/// One concrete calendar-dated instance of a weekly entry.
///
/// Derived data only; occurrences are recomputed on every invocation and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub entry: ScheduleEntry,
    pub date: NaiveDate,
}

/// Expand `entries` over every date in `range`, excluding `holidays`.
///
/// Output is ordered by date ascending, then by entry parse order within a
/// date. Two entries landing on the same date both produce an occurrence.
pub fn expand_entries(
    entries: &[ScheduleEntry],
    range: DateRange,
    holidays: &BTreeSet<NaiveDate>,
) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for date in range.days() {
        if holidays.contains(&date) {
            continue;
        }
        for entry in entries {
            if entry.weekday.matches(date) {
                occurrences.push(Occurrence {
                    entry: entry.clone(),
                    date,
                });
            }
        }
    }

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::{parse_entries, Weekday};
    use chrono::Datelike;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::from_args(from, to).unwrap()
    }

    #[test]
    fn count_matches_brute_force_weekday_count() {
        let entries = parse_entries("Algorithms,월,09:00-10:30").unwrap();
        let range = range("2025-09-01", "2025-12-19");

        let expected = range
            .days()
            .filter(|d| d.weekday().num_days_from_monday() == 0)
            .count();

        let occurrences = expand_entries(&entries, range, &BTreeSet::new());
        assert_eq!(occurrences.len(), expected);
        assert!(occurrences.iter().all(|o| o.entry.weekday == Weekday::Mon));
    }

    #[test]
    fn matching_holiday_removes_exactly_one() {
        let entries = parse_entries("Algorithms,월,09:00-10:30").unwrap();
        let range = range("2025-09-01", "2025-09-30");

        let base = expand_entries(&entries, range, &BTreeSet::new()).len();

        // 2025-09-08 is a Monday
        let holidays: BTreeSet<NaiveDate> = [date("2025-09-08")].into_iter().collect();
        let with_holiday = expand_entries(&entries, range, &holidays);
        assert_eq!(with_holiday.len(), base - 1);
        assert!(with_holiday.iter().all(|o| o.date != date("2025-09-08")));
    }

    #[test]
    fn non_matching_holiday_has_no_effect() {
        let entries = parse_entries("Algorithms,월,09:00-10:30").unwrap();
        let range = range("2025-09-01", "2025-09-30");

        let base = expand_entries(&entries, range, &BTreeSet::new()).len();

        // 2025-09-06 is a Saturday
        let holidays: BTreeSet<NaiveDate> = [date("2025-09-06")].into_iter().collect();
        assert_eq!(expand_entries(&entries, range, &holidays).len(), base);
    }

    #[test]
    fn ordered_by_date_then_parse_order() {
        let text = "Algorithms,월,09:00-10:30\nLinear Algebra,월,11:00-12:15\nDatabases,화,09:00-10:15\n";
        let entries = parse_entries(text).unwrap();
        let occurrences = expand_entries(&entries, range("2025-09-01", "2025-09-08"), &BTreeSet::new());

        let got: Vec<(&str, NaiveDate)> = occurrences
            .iter()
            .map(|o| (o.entry.subject.as_str(), o.date))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Algorithms", date("2025-09-01")),
                ("Linear Algebra", date("2025-09-01")),
                ("Databases", date("2025-09-02")),
                ("Algorithms", date("2025-09-08")),
                ("Linear Algebra", date("2025-09-08")),
            ]
        );
    }

    #[test]
    fn overlapping_entries_are_kept_distinct() {
        let text = "Algorithms,월,09:00-10:30\nAlgorithms,월,09:00-10:30\n";
        let entries = parse_entries(text).unwrap();
        let occurrences = expand_entries(&entries, range("2025-09-01", "2025-09-01"), &BTreeSet::new());
        assert_eq!(occurrences.len(), 2);
    }

    #[test]
    fn expansion_is_deterministic() {
        let entries = parse_entries("Algorithms,월,09:00-10:30\nDatabases,목,13:00-14:15").unwrap();
        let holidays: BTreeSet<NaiveDate> = [date("2025-09-08")].into_iter().collect();
        let r = range("2025-09-01", "2025-10-31");

        assert_eq!(
            expand_entries(&entries, r, &holidays),
            expand_entries(&entries, r, &holidays)
        );
    }
}
