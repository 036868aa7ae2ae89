//! `csynth metrics` — normalized metrics as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use csynth_metrics::{load_metrics, to_json, NormalizedMetrics, SENTINEL, UNRESOLVED_TEXT};

use crate::manifest::CsynthManifest;

/// Tolerance when comparing the report's clock period with the manifest's.
const CLOCK_EPSILON_NS: f64 = 1e-6;

/// Normalize `report` and print it. With a manifest, warn when the report
/// was produced for a different part or clock.
pub fn run(report: &Path, manifest: Option<&CsynthManifest>, compact: bool) -> Result<()> {
    let metrics =
        load_metrics(report).with_context(|| format!("reading {}", report.display()))?;

    if let Some(manifest) = manifest {
        for mismatch in manifest_mismatches(&metrics, manifest) {
            log::warn!("{mismatch}");
        }
    }

    println!("{}", render(&metrics, compact)?);
    Ok(())
}

pub fn render(metrics: &NormalizedMetrics, compact: bool) -> Result<String> {
    Ok(to_json(metrics, !compact)?)
}

/// Differences between what the manifest asked for and what the report
/// says. Unavailable report values are never a mismatch.
pub fn manifest_mismatches(metrics: &NormalizedMetrics, manifest: &CsynthManifest) -> Vec<String> {
    let project = &manifest.project;
    let mut mismatches = Vec::new();

    if metrics.platform != UNRESOLVED_TEXT && metrics.platform.trim() != project.platform {
        mismatches.push(format!(
            "report part '{}' differs from manifest platform '{}'",
            metrics.platform, project.platform
        ));
    }

    if metrics.clock_target != SENTINEL as f64
        && (metrics.clock_target - project.clock).abs() > CLOCK_EPSILON_NS
    {
        mismatches.push(format!(
            "report target clock {} ns differs from manifest clock {} ns",
            metrics.clock_target, project.clock
        ));
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use csynth_markup::parse;
    use csynth_metrics::normalize;

    fn manifest() -> CsynthManifest {
        CsynthManifest::parse(
            "[project]\ntop-function = \"fir\"\nplatform = \"xcvu5p\"\nclock = 10\n",
        )
        .unwrap()
    }

    #[test]
    fn matching_report_has_no_mismatches() {
        let metrics =
            normalize(&parse("<Part>xcvu5p</Part><TargetClockPeriod>10.00</TargetClockPeriod>"));
        assert!(manifest_mismatches(&metrics, &manifest()).is_empty());
    }

    #[test]
    fn different_part_and_clock() {
        let metrics =
            normalize(&parse("<Part>xc7z020</Part><TargetClockPeriod>5</TargetClockPeriod>"));
        let mismatches = manifest_mismatches(&metrics, &manifest());
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches[0].contains("xc7z020"));
        assert!(mismatches[1].contains("5 ns"));
    }

    #[test]
    fn unavailable_values_are_not_mismatches() {
        let metrics = normalize(&parse(""));
        assert!(manifest_mismatches(&metrics, &manifest()).is_empty());
    }

    #[test]
    fn render_pretty_and_compact() {
        let metrics = normalize(&parse("<FF>1</FF>"));
        let pretty = render(&metrics, false).unwrap();
        let compact = render(&metrics, true).unwrap();
        assert!(pretty.contains("\n  \"FF\": 1"));
        assert!(compact.contains("\"FF\":1"));
    }

    #[test]
    fn run_on_missing_report_fails() {
        let err = run(Path::new("/nonexistent/csynth.xml"), None, false).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
