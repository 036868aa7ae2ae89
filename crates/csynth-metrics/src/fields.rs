//! Report tag names and the raw field view over a parsed tree.

use csynth_markup::MarkupNode;

pub const PART: &str = "Part";
pub const TOP_MODEL_NAME: &str = "TopModelName";
pub const TARGET_CLOCK_PERIOD: &str = "TargetClockPeriod";
pub const ESTIMATED_CLOCK_PERIOD: &str = "EstimatedClockPeriod";
pub const WORST_CASE_LATENCY: &str = "Worst-caseLatency";
pub const AVERAGE_CASE_LATENCY: &str = "Average-caseLatency";
pub const BEST_CASE_LATENCY: &str = "Best-caseLatency";
pub const FF: &str = "FF";
pub const LUT: &str = "LUT";
pub const BRAM: &str = "BRAM_18K";
pub const DSP: &str = "DSP";
pub const AVAIL_FF: &str = "AVAIL_FF";
pub const AVAIL_LUT: &str = "AVAIL_LUT";
pub const AVAIL_BRAM: &str = "AVAIL_BRAM";
pub const AVAIL_DSP: &str = "AVAIL_DSP";

/// Worst/average/best triple, as reported for latency and execution time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cases<T> {
    pub worst: T,
    pub average: T,
    pub best: T,
}

impl<T> Cases<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Cases<U> {
        Cases {
            worst: f(self.worst),
            average: f(self.average),
            best: f(self.best),
        }
    }
}

/// One value per hardware resource category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Resources<T> {
    /// Flip-flops.
    pub ff: T,
    /// Lookup tables.
    pub lut: T,
    /// 18K block RAMs.
    pub bram: T,
    /// DSP slices.
    pub dsp: T,
}

impl<T> Resources<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Resources<U> {
        Resources {
            ff: f(self.ff),
            lut: f(self.lut),
            bram: f(self.bram),
            dsp: f(self.dsp),
        }
    }

    /// Combine two per-resource values category by category.
    pub fn zip_with<U, V>(self, other: Resources<U>, mut f: impl FnMut(T, U) -> V) -> Resources<V> {
        Resources {
            ff: f(self.ff, other.ff),
            lut: f(self.lut, other.lut),
            bram: f(self.bram, other.bram),
            dsp: f(self.dsp, other.dsp),
        }
    }
}

/// Leaf text of each known field, borrowed from the root of a parsed report.
///
/// A field is `None` when its tag is absent, self-closing/empty, or holds a
/// nested node instead of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawMetricsFields<'a> {
    pub part: Option<&'a str>,
    pub top_model_name: Option<&'a str>,
    pub target_clock_period: Option<&'a str>,
    pub estimated_clock_period: Option<&'a str>,
    pub latency: Cases<Option<&'a str>>,
    pub used: Resources<Option<&'a str>>,
    pub available: Resources<Option<&'a str>>,
}

impl<'a> RawMetricsFields<'a> {
    pub fn from_tree(root: &'a MarkupNode) -> Self {
        Self {
            part: root.leaf(PART),
            top_model_name: root.leaf(TOP_MODEL_NAME),
            target_clock_period: root.leaf(TARGET_CLOCK_PERIOD),
            estimated_clock_period: root.leaf(ESTIMATED_CLOCK_PERIOD),
            latency: Cases {
                worst: root.leaf(WORST_CASE_LATENCY),
                average: root.leaf(AVERAGE_CASE_LATENCY),
                best: root.leaf(BEST_CASE_LATENCY),
            },
            used: Resources {
                ff: root.leaf(FF),
                lut: root.leaf(LUT),
                bram: root.leaf(BRAM),
                dsp: root.leaf(DSP),
            },
            available: Resources {
                ff: root.leaf(AVAIL_FF),
                lut: root.leaf(AVAIL_LUT),
                bram: root.leaf(AVAIL_BRAM),
                dsp: root.leaf(AVAIL_DSP),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csynth_markup::{parse, MarkupValue};

    #[test]
    fn reads_known_leaves() {
        let root = parse("<Part>xcvu5p</Part><BRAM_18K>4</BRAM_18K><AVAIL_DSP>9</AVAIL_DSP>");
        let raw = RawMetricsFields::from_tree(&root);
        assert_eq!(raw.part, Some("xcvu5p"));
        assert_eq!(raw.used.bram, Some("4"));
        assert_eq!(raw.available.dsp, Some("9"));
        assert_eq!(raw.top_model_name, None);
    }

    #[test]
    fn nested_and_null_values_are_absent() {
        let mut root = MarkupNode::new();
        root.insert(FF, [("X", "1")].into_iter().collect::<MarkupNode>().into());
        root.insert(LUT, MarkupValue::Null);
        let raw = RawMetricsFields::from_tree(&root);
        assert_eq!(raw.used.ff, None);
        assert_eq!(raw.used.lut, None);
    }

    #[test]
    fn zip_with_pairs_categories() {
        let used = Resources { ff: 1, lut: 2, bram: 3, dsp: 4 };
        let avail = Resources { ff: 10, lut: 20, bram: 30, dsp: 40 };
        let sums = used.zip_with(avail, |u, a| u + a);
        assert_eq!(sums, Resources { ff: 11, lut: 22, bram: 33, dsp: 44 });
    }
}
