//! `csynth locate` — print the report path resolved from `csynth.toml`.

use std::path::Path;

use anyhow::Result;

use crate::locate::require_report;
use crate::manifest::CsynthManifest;

pub fn run(project_dir: &Path, manifest: &CsynthManifest) -> Result<()> {
    let report = require_report(project_dir, manifest)?;
    println!("{}", report.display());
    Ok(())
}
