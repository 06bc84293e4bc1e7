use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use semdir_core::archive::{package_archive, DEFAULT_ARCHIVE_NAME};

use super::build_plan;

pub async fn run(
    file: Option<PathBuf>,
    from: &str,
    to: &str,
    holidays: Option<String>,
    pattern: Option<String>,
    out: Option<PathBuf>,
    meta: bool,
) -> Result<()> {
    let (plan, pattern) = build_plan(file, from, to, holidays, pattern)?;
    let out = out.unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_NAME));

    let count = package_archive(
        &plan.occurrences,
        &pattern,
        plan.semester_start(),
        meta,
        &out,
    )
    .await?;

    println!(
        "{}",
        format!("  Created: {} ({} folders)", out.display(), count).green()
    );

    Ok(())
}
