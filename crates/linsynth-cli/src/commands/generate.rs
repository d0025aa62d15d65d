//! Generate command implementation.

use anyhow::Result;
use console::style;

use linsynth_gf2::random_invertible_matrix;

use super::common::save_json;

/// Execute the generate command.
pub fn execute(n: usize, seed: u64, output: Option<&str>) -> Result<()> {
    let matrix = random_invertible_matrix(n, seed)?;

    println!(
        "{} {n}x{n} invertible matrix (seed {})",
        style("→").cyan().bold(),
        style(seed).yellow()
    );
    println!("{matrix}");

    if let Some(path) = output {
        save_json(path, &matrix)?;
        println!("{} Matrix written to {}", style("✓").green().bold(), style(path).green());
    }

    Ok(())
}
