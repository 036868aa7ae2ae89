//! Derived metrics: clock, latency, execution time and utilization.

use csynth_markup::{MarkupNode, MarkupValue};
use serde::{Deserialize, Serialize};

use crate::coerce::{parse_integer, parse_real, project_int, project_real, project_text, ratio};
use crate::fields::{self, Cases, RawMetricsFields, Resources};

/// MHz per 1/ns.
const MHZ_PER_INVERSE_NS: f64 = 1000.0;
const HZ_PER_MHZ: f64 = 1e6;

/// Metrics with every unresolved value kept as `None`.
///
/// A legitimate zero stays distinguishable from an absent field here; the two
/// only merge in [`MetricsReport::to_normalized`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    pub platform: Option<String>,
    pub top_function: Option<String>,
    /// Target clock period, ns.
    pub clock_target: Option<f64>,
    /// Estimated clock period, ns.
    pub clock_estimated: Option<f64>,
    pub max_frequency_mhz: Option<f64>,
    /// Latency in clock cycles.
    pub latency: Cases<Option<i64>>,
    /// Raw worst-case and best-case latency values are identical.
    pub has_fixed_latency: bool,
    /// Execution time in seconds.
    pub exec_time: Cases<Option<f64>>,
    pub used: Resources<Option<i64>>,
    pub available: Resources<Option<i64>>,
    /// `used / available` per category, unclamped.
    pub utilization: Resources<Option<f64>>,
}

impl MetricsReport {
    /// Resolve and derive every field from the root of a parsed report.
    pub fn from_tree(root: &MarkupNode) -> Self {
        let raw = RawMetricsFields::from_tree(root);

        let clock_estimated = raw.estimated_clock_period.and_then(parse_real);
        let max_frequency_mhz = max_frequency_mhz(clock_estimated);

        // Counts are reported truncated; derived values use the full number.
        let latency = raw.latency.map(|text| text.and_then(parse_integer));
        let exec_time = raw
            .latency
            .map(|text| execution_time(text.and_then(parse_real), max_frequency_mhz));

        let used = raw.used.map(|text| text.and_then(parse_integer));
        let available = raw.available.map(|text| text.and_then(parse_integer));
        let utilization = raw.used.zip_with(raw.available, |used, available| {
            ratio(used.and_then(parse_real), available.and_then(parse_real))
        });

        Self {
            platform: raw.part.map(str::to_string),
            top_function: raw.top_model_name.map(str::to_string),
            clock_target: raw.target_clock_period.and_then(parse_real),
            clock_estimated,
            max_frequency_mhz,
            latency,
            has_fixed_latency: same_raw_value(
                root.get(fields::WORST_CASE_LATENCY),
                root.get(fields::BEST_CASE_LATENCY),
            ),
            exec_time,
            used,
            available,
            utilization,
        }
    }

    /// Output names of the fields that will be projected to the sentinel.
    pub fn unresolved_fields(&self) -> Vec<&'static str> {
        let numeric = [
            ("clockTarget", self.clock_target.is_none()),
            ("clockEstimated", self.clock_estimated.is_none()),
            ("maxFrequencyMHz", self.max_frequency_mhz.is_none()),
            ("latencyWorst", self.latency.worst.is_none()),
            ("latencyAvg", self.latency.average.is_none()),
            ("latencyBest", self.latency.best.is_none()),
            ("execTimeWorst", self.exec_time.worst.is_none()),
            ("execTimeAvg", self.exec_time.average.is_none()),
            ("execTimeBest", self.exec_time.best.is_none()),
            ("FF", self.used.ff.is_none()),
            ("LUT", self.used.lut.is_none()),
            ("BRAM", self.used.bram.is_none()),
            ("DSP", self.used.dsp.is_none()),
            ("availFF", self.available.ff.is_none()),
            ("availLUT", self.available.lut.is_none()),
            ("availBRAM", self.available.bram.is_none()),
            ("availDSP", self.available.dsp.is_none()),
            ("perFF", self.utilization.ff.is_none()),
            ("perLUT", self.utilization.lut.is_none()),
            ("perBRAM", self.utilization.bram.is_none()),
            ("perDSP", self.utilization.dsp.is_none()),
        ];
        [
            ("platform", self.platform.is_none()),
            ("topFunction", self.top_function.is_none()),
        ]
        .into_iter()
        .chain(numeric)
        .filter_map(|(name, unresolved)| unresolved.then_some(name))
        .collect()
    }

    /// Project every unresolved field to the `-1` sentinel.
    pub fn to_normalized(&self) -> NormalizedMetrics {
        NormalizedMetrics {
            platform: project_text(self.platform.as_deref()),
            top_function: project_text(self.top_function.as_deref()),
            clock_target: project_real(self.clock_target),
            clock_estimated: project_real(self.clock_estimated),
            max_frequency_mhz: project_real(self.max_frequency_mhz),
            latency_worst: project_int(self.latency.worst),
            latency_avg: project_int(self.latency.average),
            latency_best: project_int(self.latency.best),
            has_fixed_latency: self.has_fixed_latency,
            exec_time_worst: project_real(self.exec_time.worst),
            exec_time_avg: project_real(self.exec_time.average),
            exec_time_best: project_real(self.exec_time.best),
            ff: project_int(self.used.ff),
            lut: project_int(self.used.lut),
            bram: project_int(self.used.bram),
            dsp: project_int(self.used.dsp),
            avail_ff: project_int(self.available.ff),
            avail_lut: project_int(self.available.lut),
            avail_bram: project_int(self.available.bram),
            avail_dsp: project_int(self.available.dsp),
            per_ff: project_real(self.utilization.ff),
            per_lut: project_real(self.utilization.lut),
            per_bram: project_real(self.utilization.bram),
            per_dsp: project_real(self.utilization.dsp),
        }
    }
}

/// `1000 / period_ns`; unresolved for a missing or zero period.
pub fn max_frequency_mhz(period_ns: Option<f64>) -> Option<f64> {
    ratio(Some(MHZ_PER_INVERSE_NS), period_ns)
}

/// Seconds taken by `cycles` at `frequency_mhz`.
pub fn execution_time(cycles: Option<f64>, frequency_mhz: Option<f64>) -> Option<f64> {
    ratio(cycles, frequency_mhz.map(|f| f * HZ_PER_MHZ))
}

/// Compare two raw tree values before any numeric parse, so `"10"` and
/// `"10.0"` differ. An absent tag only equals another absent tag; an empty
/// tag only equals another empty tag. Nested nodes never compare equal.
fn same_raw_value(a: Option<&MarkupValue>, b: Option<&MarkupValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(MarkupValue::Null), Some(MarkupValue::Null)) => true,
        (Some(MarkupValue::Text(a)), Some(MarkupValue::Text(b))) => a == b,
        _ => false,
    }
}

/// The normalized metrics record.
///
/// Every field is always present. A numeric field equal to `-1` (and a text
/// field equal to `"-1"`) means *unavailable*: the report lacked the value or
/// it did not parse. It is never a legitimate measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetrics {
    pub platform: String,
    pub top_function: String,
    pub clock_target: f64,
    pub clock_estimated: f64,
    #[serde(rename = "maxFrequencyMHz")]
    pub max_frequency_mhz: f64,
    pub latency_worst: i64,
    pub latency_avg: i64,
    pub latency_best: i64,
    pub has_fixed_latency: bool,
    pub exec_time_worst: f64,
    pub exec_time_avg: f64,
    pub exec_time_best: f64,
    #[serde(rename = "FF")]
    pub ff: i64,
    #[serde(rename = "LUT")]
    pub lut: i64,
    #[serde(rename = "BRAM")]
    pub bram: i64,
    #[serde(rename = "DSP")]
    pub dsp: i64,
    #[serde(rename = "availFF")]
    pub avail_ff: i64,
    #[serde(rename = "availLUT")]
    pub avail_lut: i64,
    #[serde(rename = "availBRAM")]
    pub avail_bram: i64,
    #[serde(rename = "availDSP")]
    pub avail_dsp: i64,
    #[serde(rename = "perFF")]
    pub per_ff: f64,
    #[serde(rename = "perLUT")]
    pub per_lut: f64,
    #[serde(rename = "perBRAM")]
    pub per_bram: f64,
    #[serde(rename = "perDSP")]
    pub per_dsp: f64,
}

/// Normalize the root of a parsed report.
///
/// Pure: never fails, and one bad field never affects another.
pub fn normalize(root: &MarkupNode) -> NormalizedMetrics {
    let report = MetricsReport::from_tree(root);
    let unresolved = report.unresolved_fields();
    if !unresolved.is_empty() {
        log::debug!("unresolved report fields: {}", unresolved.join(", "));
    }
    report.to_normalized()
}
