//! Synthesis comparison harness.
//!
//! Runs every engine over a grid of matrix sizes and seeds and reports
//! gate count and depth per engine. The interesting figure is the gate
//! count of the blocked engine relative to plain Gaussian elimination,
//! which should fall as `n` grows.

pub mod error;
pub mod sweep;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use linsynth_synth::SynthesisMethod;

pub use error::{BenchError, BenchResult};
pub use sweep::{SweepConfig, run_sweep};

/// Outcome of one engine on one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Engine used.
    pub method: SynthesisMethod,
    /// Matrix dimension.
    pub n: usize,
    /// Generator seed.
    pub seed: u64,
    /// Number of CNOT gates.
    pub gate_count: usize,
    /// Circuit depth.
    pub depth: usize,
    /// Wall-clock synthesis time.
    pub duration: Duration,
}

/// Aggregate of all trials for one engine at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSummary {
    /// Engine used.
    pub method: SynthesisMethod,
    /// Matrix dimension.
    pub n: usize,
    /// Number of trials aggregated.
    pub trials: usize,
    /// Mean gate count.
    pub mean_gate_count: f64,
    /// Mean depth.
    pub mean_depth: f64,
    /// Smallest gate count seen.
    pub min_gate_count: usize,
    /// Largest gate count seen.
    pub max_gate_count: usize,
    /// Largest depth seen.
    pub max_depth: usize,
}

impl EngineSummary {
    /// Group trials by `(n, method)`, ordered by size then engine.
    pub fn from_trials(trials: &[TrialResult]) -> Vec<Self> {
        let mut groups: BTreeMap<(usize, SynthesisMethod), Vec<&TrialResult>> = BTreeMap::new();
        for trial in trials {
            groups.entry((trial.n, trial.method)).or_default().push(trial);
        }

        groups
            .into_iter()
            .map(|((n, method), group)| {
                let count = group.len();
                let total_gates: usize = group.iter().map(|t| t.gate_count).sum();
                let total_depth: usize = group.iter().map(|t| t.depth).sum();
                Self {
                    method,
                    n,
                    trials: count,
                    mean_gate_count: total_gates as f64 / count as f64,
                    mean_depth: total_depth as f64 / count as f64,
                    min_gate_count: group.iter().map(|t| t.gate_count).min().unwrap_or(0),
                    max_gate_count: group.iter().map(|t| t.gate_count).max().unwrap_or(0),
                    max_depth: group.iter().map(|t| t.depth).max().unwrap_or(0),
                }
            })
            .collect()
    }
}

/// Full result of a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Parameters the sweep ran with.
    pub config: SweepConfig,
    /// Every trial, sorted by size, engine and seed.
    pub trials: Vec<TrialResult>,
    /// Per-size, per-engine aggregates.
    pub summaries: Vec<EngineSummary>,
    /// Total wall-clock time.
    pub duration: Duration,
}

impl SweepReport {
    /// Summary for one engine at one size.
    pub fn summary(&self, n: usize, method: SynthesisMethod) -> Option<&EngineSummary> {
        self.summaries
            .iter()
            .find(|s| s.n == n && s.method == method)
    }

    /// Mean gate count of `method` divided by the Gaussian baseline at size `n`.
    pub fn gate_ratio(&self, n: usize, method: SynthesisMethod) -> Option<f64> {
        let baseline = self.summary(n, SynthesisMethod::Gaussian)?;
        let engine = self.summary(n, method)?;
        if baseline.mean_gate_count == 0.0 {
            return None;
        }
        Some(engine.mean_gate_count / baseline.mean_gate_count)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
