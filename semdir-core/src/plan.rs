//! The preview/export pipeline: parse, validate, generate.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::error::SemdirResult;
use crate::expand::{expand_entries, Occurrence};
use crate::pattern;
use crate::timetable::{parse_entries, ScheduleEntry};

/// How many resolved paths a preview shows before truncating.
pub const PREVIEW_LIMIT: usize = 60;

/// A fully generated plan: parsed entries plus their expanded occurrences.
#[derive(Debug, Clone)]
pub struct Plan {
    pub entries: Vec<ScheduleEntry>,
    pub occurrences: Vec<Occurrence>,
    pub range: DateRange,
}

impl Plan {
    /// Run the pipeline over raw timetable text. The first failing stage
    /// aborts the whole build and surfaces its error unchanged.
    pub fn build(
        text: &str,
        range: DateRange,
        holidays: &BTreeSet<NaiveDate>,
    ) -> SemdirResult<Self> {
        let entries = parse_entries(text)?;
        let occurrences = expand_entries(&entries, range, holidays);
        Ok(Plan {
            entries,
            occurrences,
            range,
        })
    }

    /// The semester start that week numbers count from.
    pub fn semester_start(&self) -> NaiveDate {
        self.range.start
    }

    /// Human-readable preview: the first [`PREVIEW_LIMIT`] resolved paths,
    /// with a remainder note when truncated.
    pub fn preview(&self, pat: &str) -> SemdirResult<String> {
        if self.occurrences.is_empty() {
            return Ok("(no occurrences)".to_string());
        }

        let mut lines = Vec::new();
        for occurrence in self.occurrences.iter().take(PREVIEW_LIMIT) {
            lines.push(pattern::resolve(pat, occurrence, self.semester_start())?);
        }

        let mut out = lines.join("\n");
        if self.occurrences.len() > PREVIEW_LIMIT {
            out.push_str(&format!(
                "\n... and {} more",
                self.occurrences.len() - PREVIEW_LIMIT
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::parse_holidays;
    use crate::pattern::DEFAULT_PATTERN;

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::from_args(from, to).unwrap()
    }

    #[test]
    fn build_then_preview_golden() {
        let plan = Plan::build(
            "Algorithms,월,09:00-10:30",
            range("2025-09-01", "2025-09-08"),
            &BTreeSet::new(),
        )
        .unwrap();

        assert_eq!(plan.occurrences.len(), 2);
        assert_eq!(
            plan.preview(DEFAULT_PATTERN).unwrap(),
            "Algorithms/주차01/월_09-01\nAlgorithms/주차02/월_09-08"
        );
    }

    #[test]
    fn build_propagates_parse_errors() {
        assert!(Plan::build(
            "Algorithms,월,0900",
            range("2025-09-01", "2025-09-08"),
            &BTreeSet::new(),
        )
        .is_err());
    }

    #[test]
    fn build_respects_holidays() {
        let holidays = parse_holidays("2025-09-01").unwrap();
        let plan = Plan::build(
            "Algorithms,월,09:00-10:30",
            range("2025-09-01", "2025-09-08"),
            &holidays,
        )
        .unwrap();
        assert_eq!(plan.occurrences.len(), 1);
    }

    #[test]
    fn preview_truncates_past_the_limit() {
        // Mondays only, long enough for well over PREVIEW_LIMIT occurrences
        let plan = Plan::build(
            "Algorithms,월,09:00-10:30",
            range("2025-09-01", "2026-12-28"),
            &BTreeSet::new(),
        )
        .unwrap();
        assert!(plan.occurrences.len() > PREVIEW_LIMIT);

        let preview = plan.preview(DEFAULT_PATTERN).unwrap();
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), PREVIEW_LIMIT + 1);
        assert_eq!(
            *lines.last().unwrap(),
            format!("... and {} more", plan.occurrences.len() - PREVIEW_LIMIT)
        );
    }

    #[test]
    fn empty_preview_placeholder() {
        // Monday entry, Saturday-only range
        let plan = Plan::build(
            "Algorithms,월,09:00-10:30",
            range("2025-09-06", "2025-09-06"),
            &BTreeSet::new(),
        )
        .unwrap();
        assert_eq!(plan.preview(DEFAULT_PATTERN).unwrap(), "(no occurrences)");
    }
}
