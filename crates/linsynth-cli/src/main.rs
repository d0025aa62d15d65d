//! linsynth command-line interface
//!
//! Generates random invertible GF(2) matrices, synthesizes them into CNOT
//! circuits and compares the synthesis engines.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{compare, generate, synth, version};
use config::Config;

/// linsynth - CNOT circuit synthesis for linear reversible functions
#[derive(Parser)]
#[command(name = "linsynth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.linsynth/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random invertible matrix
    Generate {
        /// Matrix dimension
        #[arg(short)]
        n: usize,

        /// Generator seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Write the matrix as JSON
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Synthesize a CNOT circuit for a matrix
    Synth {
        /// Generate an n x n matrix instead of reading one
        #[arg(short, conflicts_with = "input")]
        n: Option<usize>,

        /// Generator seed (with -n)
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Matrix JSON file
        #[arg(short, long)]
        input: Option<String>,

        /// Engine (pmh, gaussian, kms)
        #[arg(short, long)]
        method: Option<String>,

        /// PMH section size
        #[arg(long)]
        section_size: Option<usize>,

        /// Replay-check the circuit before reporting it
        #[arg(long)]
        verify: bool,

        /// Write the circuit as JSON
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compare all engines over a grid of sizes and seeds
    Compare {
        /// Matrix dimensions
        #[arg(long, value_delimiter = ',', default_value = "8,16,32,64")]
        sizes: Vec<usize>,

        /// Seeds per size
        #[arg(long, default_value = "4")]
        seeds: u64,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn log_filter(verbose: u8, config: &Config) -> EnvFilter {
    match verbose {
        0 => std::env::var("RUST_LOG")
            .ok()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(&config.logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Generate { n, seed, output } => generate::execute(n, seed, output.as_deref()),

        Commands::Synth {
            n,
            seed,
            input,
            method,
            section_size,
            verify,
            output,
        } => synth::execute(
            &synth::SynthArgs {
                n,
                seed,
                input: input.as_deref(),
                method: method.as_deref(),
                section_size,
                verify,
                output: output.as_deref(),
            },
            &config,
        ),

        Commands::Compare { sizes, seeds, json } => compare::execute(sizes, seeds, json, &config),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
