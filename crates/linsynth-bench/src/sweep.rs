//! Size/seed sweeps over the synthesis engines.
//!
//! Every `(size, seed)` cell generates one matrix and runs each engine on
//! it. Cells are independent and run on the rayon pool; the collected
//! trials are sorted afterwards so the report does not depend on thread
//! scheduling.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use linsynth_gf2::random_invertible_matrix;
use linsynth_synth::{SynthesisMethod, Synthesizer, Verified};

use crate::error::{BenchError, BenchResult};
use crate::{EngineSummary, SweepReport, TrialResult};

/// Parameters of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Matrix dimensions to test.
    pub sizes: Vec<usize>,
    /// Number of seeds per size; seeds are `0..seeds`.
    pub seeds: u64,
    /// Engines to compare.
    pub methods: Vec<SynthesisMethod>,
    /// Explicit PMH section size, if any.
    pub section_size: Option<usize>,
    /// Replay-check every circuit.
    pub verify: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![8, 16, 32, 64],
            seeds: 4,
            methods: SynthesisMethod::ALL.to_vec(),
            section_size: None,
            verify: true,
        }
    }
}

impl SweepConfig {
    /// Reject empty or degenerate sweeps.
    pub fn validate(&self) -> BenchResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidSweep("no sizes given".into()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidSweep("size 0 is not a matrix".into()));
        }
        if self.seeds == 0 {
            return Err(BenchError::InvalidSweep("at least one seed is required".into()));
        }
        if self.methods.is_empty() {
            return Err(BenchError::InvalidSweep("no engines selected".into()));
        }
        Ok(())
    }

    /// Number of `(size, seed)` cells.
    pub fn num_cells(&self) -> u64 {
        self.sizes.len() as u64 * self.seeds
    }
}

/// Run a sweep. `on_cell` is called once per finished `(size, seed)` cell,
/// from whichever worker thread finished it.
pub fn run_sweep<F>(config: &SweepConfig, on_cell: F) -> BenchResult<SweepReport>
where
    F: Fn() + Sync,
{
    config.validate()?;
    let start = Instant::now();

    // Build engines up front so configuration errors surface before any work.
    let engines = config
        .methods
        .iter()
        .map(|&method| -> BenchResult<_> {
            Ok((method, Verified::new(method.configured(config.section_size)?)))
        })
        .collect::<BenchResult<Vec<_>>>()?;

    let cells: Vec<(usize, u64)> = config
        .sizes
        .iter()
        .flat_map(|&n| (0..config.seeds).map(move |seed| (n, seed)))
        .collect();
    info!(
        cells = cells.len(),
        engines = engines.len(),
        "starting synthesis sweep"
    );

    let per_cell = cells
        .par_iter()
        .map(|&(n, seed)| -> BenchResult<Vec<TrialResult>> {
            let matrix = random_invertible_matrix(n, seed)?;
            let mut trials = Vec::with_capacity(engines.len());
            for (method, engine) in &engines {
                let started = Instant::now();
                let circuit = if config.verify {
                    engine.synthesize(&matrix)?
                } else {
                    engine.inner().synthesize(&matrix)?
                };
                trials.push(TrialResult {
                    method: *method,
                    n,
                    seed,
                    gate_count: circuit.size(),
                    depth: circuit.depth(),
                    duration: started.elapsed(),
                });
            }
            debug!(n, seed, "cell finished");
            on_cell();
            Ok(trials)
        })
        .collect::<BenchResult<Vec<Vec<TrialResult>>>>()?;

    let mut trials: Vec<TrialResult> = per_cell.into_iter().flatten().collect();
    trials.sort_by_key(|t| (t.n, t.method, t.seed));
    let summaries = EngineSummary::from_trials(&trials);

    Ok(SweepReport {
        config: config.clone(),
        trials,
        summaries,
        duration: start.elapsed(),
    })
}
