//! `csynth tree` — the raw parsed tag tree as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use csynth_metrics::read_report;

pub fn run(report: &Path, compact: bool) -> Result<()> {
    println!("{}", render(report, compact)?);
    Ok(())
}

pub fn render(report: &Path, compact: bool) -> Result<String> {
    let tree = read_report(report).with_context(|| format!("reading {}", report.display()))?;
    let json = if compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    Ok(json)
}
