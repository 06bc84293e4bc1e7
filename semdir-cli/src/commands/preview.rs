use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::build_plan;

pub fn run(
    file: Option<PathBuf>,
    from: &str,
    to: &str,
    holidays: Option<String>,
    pattern: Option<String>,
    json: bool,
) -> Result<()> {
    let (plan, pattern) = build_plan(file, from, to, holidays, pattern)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.occurrences)?);
        return Ok(());
    }

    println!("{}", plan.preview(&pattern)?);
    println!(
        "{}",
        format!(
            "  {} occurrences between {} and {}",
            plan.occurrences.len(),
            plan.range.start,
            plan.range.end
        )
        .dimmed()
    );

    Ok(())
}
