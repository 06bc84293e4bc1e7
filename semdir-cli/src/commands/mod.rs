pub mod export;
pub mod init;
pub mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use semdir_core::holiday::parse_holidays;
use semdir_core::semdir::Semdir;
use semdir_core::semdir_config::SemdirConfig;
use semdir_core::{DateRange, Plan};

/// Resolve the inputs shared by preview and export: timetable text, date
/// range, holidays, and the effective pattern (flag > config > built-in).
pub(crate) fn build_plan(
    file: Option<PathBuf>,
    from: &str,
    to: &str,
    holidays: Option<String>,
    pattern: Option<String>,
) -> Result<(Plan, String)> {
    let semdir = Semdir::load()?;

    let path = match file.or_else(|| semdir.timetable_path()) {
        Some(path) => path,
        None => anyhow::bail!(
            "No timetable file given.\n\n\
            Pass one directly:\n  \
            semdir preview my-classes.txt --from 2025-09-01 --to 2025-12-19\n\n\
            Or set a default in {}:\n  \
            timetable = \"~/semester/timetable.txt\"",
            SemdirConfig::config_path()?.display()
        ),
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let range = DateRange::from_args(from, to)?;
    let holiday_list = holidays.unwrap_or_else(|| semdir.holidays().to_string());
    let holiday_set = parse_holidays(&holiday_list)?;
    let pattern = pattern.unwrap_or_else(|| semdir.pattern().to_string());

    let plan = Plan::build(&text, range, &holiday_set)?;
    Ok((plan, pattern))
}
