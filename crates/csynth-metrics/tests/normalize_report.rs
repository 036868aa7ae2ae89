//! End-to-end tests: report text in, normalized metrics out.

use csynth_markup::{parse, MarkupValue};
use csynth_metrics::{normalize, MetricsReport, NormalizedMetrics};

const FIXTURE: &str = include_str!("fixtures/csynth.xml");

fn normalize_text(text: &str) -> NormalizedMetrics {
    normalize(&parse(text))
}

#[test]
fn single_line_scenario() {
    let text = "<Part>xcvu5p</Part><TopModelName>foo</TopModelName>\
        <TargetClockPeriod>10</TargetClockPeriod><EstimatedClockPeriod>8</EstimatedClockPeriod>\
        <Worst-caseLatency>50</Worst-caseLatency><Average-caseLatency>40</Average-caseLatency>\
        <Best-caseLatency>30</Best-caseLatency><FF>100</FF><AVAIL_FF>1000</AVAIL_FF>";
    let m = normalize_text(text);

    assert_eq!(m.platform, "xcvu5p");
    assert_eq!(m.top_function, "foo");
    assert_eq!(m.clock_target, 10.0);
    assert_eq!(m.clock_estimated, 8.0);
    assert_eq!(m.max_frequency_mhz, 125.0);
    assert_eq!(m.latency_worst, 50);
    assert_eq!(m.latency_avg, 40);
    assert_eq!(m.latency_best, 30);
    assert!(!m.has_fixed_latency);
    assert_eq!(m.exec_time_worst, 50.0 / 125e6);
    assert_eq!(m.ff, 100);
    assert_eq!(m.avail_ff, 1000);
    assert_eq!(m.per_ff, 0.1);

    for value in [m.lut, m.bram, m.dsp, m.avail_lut, m.avail_bram, m.avail_dsp] {
        assert_eq!(value, -1);
    }
    for value in [m.per_lut, m.per_bram, m.per_dsp] {
        assert_eq!(value, -1.0);
    }
}

#[test]
fn pretty_printed_report_fixture() {
    let tree = parse(FIXTURE);

    // Container tags span lines and never pair; their leaves surface at the top.
    assert!(tree.get("profile").is_none());
    assert!(tree.get("UserAssignments").is_none());
    assert_eq!(tree.get("PipelineDepth"), Some(&MarkupValue::Null));

    let m = normalize(&tree);
    assert_eq!(m.platform, "xcvu5p-flva2104-1-e");
    assert_eq!(m.top_function, "matmul");
    assert_eq!(m.clock_target, 10.0);
    assert_eq!(m.clock_estimated, 7.3);
    assert_eq!(m.max_frequency_mhz, 1000.0 / 7.3);
    assert_eq!(m.latency_worst, 4163);
    assert_eq!(m.latency_avg, 4163);
    assert_eq!(m.latency_best, 4163);
    assert!(m.has_fixed_latency);
    assert_eq!(m.exec_time_worst, 4163.0 / (m.max_frequency_mhz * 1e6));
    assert_eq!(m.exec_time_best, m.exec_time_worst);

    assert_eq!((m.ff, m.lut, m.bram, m.dsp), (254, 437, 2, 3));
    assert_eq!(
        (m.avail_ff, m.avail_lut, m.avail_bram, m.avail_dsp),
        (1201154, 600577, 4096, 3474)
    );
    assert_eq!(m.per_ff, 254.0 / 1201154.0);
    assert_eq!(m.per_lut, 437.0 / 600577.0);
    assert_eq!(m.per_bram, 2.0 / 4096.0);
    assert_eq!(m.per_dsp, 3.0 / 3474.0);
}

#[test]
fn fixture_without_timing_degrades_field_by_field() {
    let text: String = FIXTURE
        .lines()
        .filter(|line| !line.contains("EstimatedClockPeriod") && !line.contains("AVAIL_LUT"))
        .collect::<Vec<_>>()
        .join("\n");
    let m = normalize_text(&text);

    assert_eq!(m.clock_estimated, -1.0);
    assert_eq!(m.max_frequency_mhz, -1.0);
    assert_eq!(m.exec_time_worst, -1.0);
    assert_eq!(m.latency_worst, 4163);

    assert_eq!(m.avail_lut, -1);
    assert_eq!(m.per_lut, -1.0);
    assert_eq!(m.per_ff, 254.0 / 1201154.0);
}

#[test]
fn missing_available_count_only_affects_its_ratio() {
    let m = normalize_text("<FF>100</FF><LUT>50</LUT><AVAIL_LUT>500</AVAIL_LUT>");
    assert_eq!(m.ff, 100);
    assert_eq!(m.per_ff, -1.0);
    assert_eq!(m.per_lut, 0.1);
}

#[test]
fn derived_frequency_and_time() {
    let m = normalize_text("<EstimatedClockPeriod>5</EstimatedClockPeriod><Worst-caseLatency>100</Worst-caseLatency>");
    assert_eq!(m.max_frequency_mhz, 200.0);
    assert_eq!(m.exec_time_worst, 5e-7);
}

#[test]
fn fixed_latency_is_textual() {
    let same = normalize_text("<Worst-caseLatency>10</Worst-caseLatency><Best-caseLatency>10</Best-caseLatency>");
    assert!(same.has_fixed_latency);

    let differ =
        normalize_text("<Worst-caseLatency>10</Worst-caseLatency><Best-caseLatency>10.0</Best-caseLatency>");
    assert!(!differ.has_fixed_latency);
}

#[test]
fn normalizing_twice_is_identical() {
    let tree = parse(FIXTURE);
    let first = normalize(&tree);
    let second = normalize(&tree);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn sentinel_is_distinct_from_zero() {
    let zero = MetricsReport::from_tree(&parse("<DSP>0</DSP><AVAIL_DSP>3474</AVAIL_DSP>"));
    let absent = MetricsReport::from_tree(&parse("<AVAIL_DSP>3474</AVAIL_DSP>"));

    assert_eq!(zero.used.dsp, Some(0));
    assert_eq!(absent.used.dsp, None);
    assert_eq!(zero.to_normalized().dsp, 0);
    assert_eq!(absent.to_normalized().dsp, -1);
    assert_eq!(zero.to_normalized().per_dsp, 0.0);
    assert_eq!(absent.to_normalized().per_dsp, -1.0);
}

#[test]
fn parallel_callers_agree() {
    let expected = normalize_text(FIXTURE);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| normalize_text(FIXTURE)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
