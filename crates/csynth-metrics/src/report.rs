//! Reading report files and exporting normalized metrics.

use std::path::Path;

use csynth_markup::MarkupNode;

use crate::error::{ReportError, Result};
use crate::metrics::{normalize, NormalizedMetrics};

/// Read and parse a report file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// tags the normalizer reads are plain ASCII.
pub fn read_report(path: &Path) -> Result<MarkupNode> {
    if !path.is_file() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let tree = csynth_markup::parse(&text);
    log::debug!("parsed {} top-level tags from {}", tree.len(), path.display());
    Ok(tree)
}

/// Read, parse and normalize a report file.
pub fn load_metrics(path: &Path) -> Result<NormalizedMetrics> {
    log::info!("Processing synthesis report {}", path.display());
    let metrics = normalize(&read_report(path)?);
    log::info!("Finished processing synthesis report");
    Ok(metrics)
}

/// Serialize metrics to JSON.
pub fn to_json(metrics: &NormalizedMetrics, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(metrics)?
    } else {
        serde_json::to_string(metrics)?
    };
    Ok(json)
}
