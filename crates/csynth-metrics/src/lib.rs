//! Normalized metrics from HLS synthesis reports.
//!
//! Maps the tag tree produced by `csynth-markup` onto a typed record of
//! clock, latency, execution-time and resource-utilization figures:
//! - **fields:** the report tags read and a borrowed view over them
//! - **coerce:** numeric coercion and the `-1` sentinel projection
//! - **metrics:** derived values and the normalized record
//! - **report:** file loading and JSON export
//!
//! Unresolved values are carried as `Option` until the final projection, so
//! `-1` in a [`NormalizedMetrics`] field always means "unavailable".

pub mod coerce;
pub mod error;
pub mod fields;
pub mod metrics;
pub mod report;

pub use coerce::{SENTINEL, UNRESOLVED_TEXT};
pub use error::ReportError;
pub use fields::{Cases, RawMetricsFields, Resources};
pub use metrics::{normalize, MetricsReport, NormalizedMetrics};
pub use report::{load_metrics, read_report, to_json};
