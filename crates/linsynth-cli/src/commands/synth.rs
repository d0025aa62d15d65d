//! Synth command implementation.

use anyhow::{Result, bail};
use console::style;
use tracing::info;

use linsynth_gf2::{BinaryMatrix, random_invertible_matrix};
use linsynth_synth::{SynthesisMethod, Synthesizer, Verified};

use super::common::{load_matrix, save_json};
use crate::config::Config;

/// Flags of the synth command. Unset options fall back to the configuration.
pub struct SynthArgs<'a> {
    pub n: Option<usize>,
    pub seed: u64,
    pub input: Option<&'a str>,
    pub method: Option<&'a str>,
    pub section_size: Option<usize>,
    pub verify: bool,
    pub output: Option<&'a str>,
}

/// Execute the synth command.
pub fn execute(args: &SynthArgs<'_>, config: &Config) -> Result<()> {
    let matrix = source_matrix(args)?;

    let method: SynthesisMethod = match args.method {
        Some(name) => name.parse()?,
        None => config.method()?,
    };
    let section_size = args.section_size.or(config.synthesis.section_size);
    let verify = args.verify || config.synthesis.verify;

    let engine = method.configured(section_size)?;
    let engine: Box<dyn Synthesizer> = if verify {
        Box::new(Verified::new(engine))
    } else {
        engine
    };

    println!(
        "{} Synthesizing {}x{} matrix with {}",
        style("→").cyan().bold(),
        matrix.num_rows(),
        matrix.num_cols(),
        style(method).yellow()
    );

    let circuit = engine.synthesize(&matrix)?;
    info!(
        method = %method,
        gates = circuit.size(),
        depth = circuit.depth(),
        verified = verify,
        "synthesis finished"
    );

    println!("gate_count = {}, depth = {}", circuit.size(), circuit.depth());
    if verify {
        println!("{} Circuit reproduces the matrix", style("✓").green().bold());
    }

    if let Some(path) = args.output {
        save_json(path, &circuit)?;
        println!("{} Circuit written to {}", style("✓").green().bold(), style(path).green());
    }

    Ok(())
}

fn source_matrix(args: &SynthArgs<'_>) -> Result<BinaryMatrix> {
    match (args.input, args.n) {
        (Some(path), _) => load_matrix(path),
        (None, Some(n)) => Ok(random_invertible_matrix(n, args.seed)?),
        (None, None) => bail!("Either --input or -n is required"),
    }
}
