//! End-to-end sweep comparing the blocked engine with the baseline.

use linsynth_bench::{SweepConfig, run_sweep};
use linsynth_synth::SynthesisMethod;

#[test]
fn test_pmh_below_baseline_at_scale() {
    let config = SweepConfig {
        sizes: vec![32, 64],
        seeds: 3,
        methods: vec![SynthesisMethod::Gaussian, SynthesisMethod::Pmh],
        section_size: None,
        verify: true,
    };
    let report = run_sweep(&config, || {}).unwrap();

    for n in [32, 64] {
        let ratio = report.gate_ratio(n, SynthesisMethod::Pmh).unwrap();
        assert!(ratio < 1.0, "n={n}: ratio {ratio}");
    }
}

#[test]
fn test_kms_depth_bound_in_sweep() {
    let config = SweepConfig {
        sizes: vec![5, 10, 20],
        seeds: 2,
        methods: vec![SynthesisMethod::Kms],
        section_size: None,
        verify: true,
    };
    let report = run_sweep(&config, || {}).unwrap();
    for summary in &report.summaries {
        assert!(summary.max_depth <= 5 * summary.n, "n={}", summary.n);
    }
}

#[test]
fn test_report_json_round_trip() {
    let config = SweepConfig {
        sizes: vec![6],
        seeds: 1,
        ..SweepConfig::default()
    };
    let report = run_sweep(&config, || {}).unwrap();
    let json = report.to_json().unwrap();
    let back: linsynth_bench::SweepReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.trials, report.trials);
    assert_eq!(back.config, config);
}
