//! Compare command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use linsynth_bench::{SweepConfig, SweepReport, run_sweep};
use linsynth_synth::SynthesisMethod;

use crate::config::Config;

/// Execute the compare command.
pub fn execute(sizes: Vec<usize>, seeds: u64, json: bool, config: &Config) -> Result<()> {
    let sweep = SweepConfig {
        sizes,
        seeds,
        methods: SynthesisMethod::ALL.to_vec(),
        section_size: config.synthesis.section_size,
        verify: config.synthesis.verify,
    };
    sweep.validate()?;

    let progress = ProgressBar::new(sweep.num_cells());
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_message("synthesizing");

    let report = run_sweep(&sweep, || progress.inc(1));
    progress.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_table(&report);
    }
    Ok(())
}

fn print_table(report: &SweepReport) {
    println!(
        "{} {} seeds per size, {:.2?}",
        style("→").cyan().bold(),
        report.config.seeds,
        report.duration
    );
    println!();
    let header = format!(
        "{:>6}  {:<9} {:>12} {:>12} {:>10}",
        "n", "engine", "mean gates", "mean depth", "vs gauss"
    );
    println!("{}", style(header).bold());

    for summary in &report.summaries {
        let ratio = report
            .gate_ratio(summary.n, summary.method)
            .map_or_else(|| "-".to_string(), |r| format!("{r:.3}"));
        println!(
            "{:>6}  {:<9} {:>12.1} {:>12.1} {:>10}",
            summary.n,
            summary.method.as_str(),
            summary.mean_gate_count,
            summary.mean_depth,
            ratio
        );
    }
}
