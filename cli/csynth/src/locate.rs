//! Locating the synthesis report produced for a project.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::manifest::CsynthManifest;

/// Candidate report paths, in lookup order: the bare `csynth.xml`, then the
/// top-function-qualified `<top>_csynth.xml`.
pub fn report_candidates(report_dir: &Path, top_function: &str) -> [PathBuf; 2] {
    [
        report_dir.join("csynth.xml"),
        report_dir.join(format!("{top_function}_csynth.xml")),
    ]
}

/// First existing report for the project, if synthesis produced one.
pub fn find_report(project_dir: &Path, manifest: &CsynthManifest) -> Option<PathBuf> {
    let report_dir = manifest.report_dir(project_dir);
    report_candidates(&report_dir, &manifest.project.top_function)
        .into_iter()
        .find(|path| {
            let found = path.is_file();
            log::debug!("report candidate {} (found: {found})", path.display());
            found
        })
}

/// Like [`find_report`], but a missing report is an error naming the paths
/// that were tried.
pub fn require_report(project_dir: &Path, manifest: &CsynthManifest) -> Result<PathBuf> {
    if let Some(path) = find_report(project_dir, manifest) {
        log::info!("using synthesis report {}", path.display());
        return Ok(path);
    }
    let tried: Vec<String> =
        report_candidates(&manifest.report_dir(project_dir), &manifest.project.top_function)
            .iter()
            .map(|p| p.display().to_string())
            .collect();
    bail!(
        "no synthesis report found, synthesis either failed or has not been run yet (tried {})",
        tried.join(", ")
    )
}
