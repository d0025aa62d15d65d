//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - CNOT synthesis for linear reversible functions",
        style("linsynth").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  linsynth-gf2    GF(2) matrices and random invertible generation");
    println!("  linsynth-ir     CNOT circuits and depth scheduling");
    println!("  linsynth-synth  Gaussian, PMH and KMS synthesis engines");
    println!("  linsynth-bench  Engine comparison sweeps");
    println!("  linsynth-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style(env!("CARGO_PKG_REPOSITORY")).underlined()
    );
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
