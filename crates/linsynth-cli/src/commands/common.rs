//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use linsynth_gf2::BinaryMatrix;

/// Load a matrix from a JSON file holding a list of 0/1 rows.
pub fn load_matrix(path: &str) -> Result<BinaryMatrix> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid matrix in {path}"))
}

/// Write `value` as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write file: {path}"))
}
