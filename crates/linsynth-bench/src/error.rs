//! Error types for benchmark sweeps.

use linsynth_gf2::Gf2Error;
use linsynth_synth::SynthError;
use thiserror::Error;

/// Errors that can occur while running a sweep.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// Matrix generation failed.
    #[error("Matrix error: {0}")]
    Matrix(#[from] Gf2Error),

    /// An engine failed on a generated matrix.
    #[error("Synthesis error: {0}")]
    Synth(#[from] SynthError),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sweep parameters are unusable.
    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
