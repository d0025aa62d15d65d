//! Replay verification of synthesized circuits.

use tracing::{debug, warn};

use linsynth_gf2::BinaryMatrix;
use linsynth_ir::{IrError, LinearCircuit};

use crate::error::{SynthError, SynthResult};
use crate::synthesizer::Synthesizer;

/// Check that `circuit`, replayed on the identity, reproduces `matrix`.
pub fn verify_circuit(matrix: &BinaryMatrix, circuit: &LinearCircuit) -> SynthResult<()> {
    if !matrix.is_square() {
        return Err(SynthError::NotSquare {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
        });
    }
    if matrix.num_rows() != circuit.num_qubits() {
        return Err(IrError::WidthMismatch {
            circuit: circuit.num_qubits(),
            other: matrix.num_rows(),
        }
        .into());
    }

    let replayed = circuit.to_matrix();
    let mismatched_rows = replayed
        .rows()
        .zip(matrix.rows())
        .filter(|(a, b)| a != b)
        .count();
    if mismatched_rows > 0 {
        return Err(SynthError::VerificationFailed {
            size: matrix.num_rows(),
            mismatched_rows,
        });
    }
    Ok(())
}

/// Wraps a synthesizer and verifies every circuit it returns.
#[derive(Debug, Clone, Default)]
pub struct Verified<S> {
    inner: S,
}

impl<S: Synthesizer> Verified<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped synthesizer.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Synthesizer> Synthesizer for Verified<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
        let circuit = self.inner.synthesize(matrix)?;
        if let Err(e) = verify_circuit(matrix, &circuit) {
            warn!(method = self.inner.name(), error = %e, "circuit failed replay check");
            return Err(e);
        }
        debug!(method = self.inner.name(), "circuit verified");
        Ok(circuit)
    }
}
