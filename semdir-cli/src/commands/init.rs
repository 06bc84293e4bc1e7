use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Timetable template written by `semdir init`.
const TEMPLATE: &str = "\
# One class per line: subject, weekday, start-end
#
# Weekdays: 월 화 수 목 금 토 일 (long forms like 월요일 work too)
# Times: 09:00-10:30 or compact 0900-1030
#
# Algorithms, 월, 09:00-10:30
# Operating Systems, 수, 1300-1445
";

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(path, TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}", format!("  Created: {}", path.display()).green());
    Ok(())
}
