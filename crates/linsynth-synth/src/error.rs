//! Error types for synthesis.

use linsynth_gf2::Gf2Error;
use linsynth_ir::IrError;
use thiserror::Error;

/// Errors that can occur during synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Input matrix has rank below its dimension.
    #[error("Matrix is not invertible: rank {rank} < {size}")]
    NotInvertible {
        /// Rank over GF(2).
        rank: usize,
        /// Dimension of the matrix.
        size: usize,
    },

    /// Input matrix is rectangular.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix engine error.
    #[error("Matrix error: {0}")]
    Matrix(#[from] Gf2Error),

    /// Circuit construction error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// Engine parameters are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A synthesized circuit does not replay to its input.
    #[error("Verification failed: {mismatched_rows} of {size} rows differ after replay")]
    VerificationFailed {
        /// Dimension of the matrix.
        size: usize,
        /// Rows where the replayed circuit disagrees with the input.
        mismatched_rows: usize,
    },
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gf2_error() {
        let err: SynthError = Gf2Error::invalid_size(0).into();
        assert!(matches!(err, SynthError::Matrix(_)));
        assert_eq!(err.to_string(), "Matrix error: Invalid matrix size 0");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SynthError::NotInvertible { rank: 1, size: 2 }.to_string(),
            "Matrix is not invertible: rank 1 < 2"
        );
        assert_eq!(
            SynthError::VerificationFailed {
                size: 4,
                mismatched_rows: 2
            }
            .to_string(),
            "Verification failed: 2 of 4 rows differ after replay"
        );
    }
}
