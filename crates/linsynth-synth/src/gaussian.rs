//! Baseline synthesis by Gauss-Jordan elimination.

use tracing::{debug, instrument};

use linsynth_gf2::BinaryMatrix;
use linsynth_ir::LinearCircuit;

use crate::error::SynthResult;
use crate::synthesizer::{Synthesizer, circuit_from_ops, not_invertible, square_dimension};

/// Reference synthesizer: reduce the matrix to the identity one column at
/// a time and replay the reduction backwards.
///
/// Produces O(n²) gates. It is kept as the correctness oracle and as the
/// baseline the blocked engine is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianSynthesis;

impl GaussianSynthesis {
    /// Row additions `(control, target)` that take `work` to the identity,
    /// in the order they were applied. `None` if a pivot is missing.
    pub(crate) fn reduce(work: &mut BinaryMatrix) -> Option<Vec<(usize, usize)>> {
        let n = work.num_rows();
        let mut ops = Vec::new();

        for col in 0..n {
            if !work.get(col, col) {
                let pivot = (col + 1..n).find(|&r| work.get(r, col))?;
                work.row_xor(col, pivot);
                ops.push((pivot, col));
            }
            for row in 0..n {
                if row != col && work.get(row, col) {
                    work.row_xor(row, col);
                    ops.push((col, row));
                }
            }
        }
        Some(ops)
    }
}

impl Synthesizer for GaussianSynthesis {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    #[instrument(name = "gaussian", skip_all, fields(n = matrix.num_rows()))]
    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
        let n = square_dimension(matrix)?;
        let mut work = matrix.clone();
        let ops = Self::reduce(&mut work).ok_or_else(|| not_invertible(matrix))?;
        debug_assert!(work.is_identity());

        // Each row addition is its own inverse, so the reduction read
        // backwards builds the matrix from the identity.
        let circuit = circuit_from_ops(n, ops.into_iter().rev())?;
        debug!(method = "gaussian", n, gates = circuit.size(), "synthesis complete");
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use linsynth_gf2::random_invertible_matrix;
    use linsynth_ir::QubitId;

    #[test]
    fn test_identity_needs_no_gates() {
        let circuit = GaussianSynthesis
            .synthesize(&BinaryMatrix::identity(3))
            .unwrap();
        assert_eq!(circuit.size(), 0);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_upper_unit_two_by_two() {
        let m = BinaryMatrix::from_bits(&[&[1, 1], &[0, 1]]).unwrap();
        let circuit = GaussianSynthesis.synthesize(&m).unwrap();
        assert_eq!(circuit.size(), 1);
        assert_eq!(circuit.gates()[0].control(), QubitId(1));
        assert_eq!(circuit.gates()[0].target(), QubitId(0));
        assert_eq!(circuit.to_matrix(), m);
    }

    #[test]
    fn test_swap_needs_three_gates() {
        let m = BinaryMatrix::from_bits(&[&[0, 1], &[1, 0]]).unwrap();
        let circuit = GaussianSynthesis.synthesize(&m).unwrap();
        assert_eq!(circuit.size(), 3);
        assert_eq!(circuit.to_matrix(), m);
    }

    #[test]
    fn test_random_replay() {
        for n in [1, 2, 5, 13, 32] {
            let m = random_invertible_matrix(n, 11).unwrap();
            let circuit = GaussianSynthesis.synthesize(&m).unwrap();
            assert_eq!(circuit.to_matrix(), m, "n={n}");
        }
    }

    #[test]
    fn test_singular_rejected() {
        let m = BinaryMatrix::from_bits(&[&[1, 1, 0], &[0, 1, 1], &[1, 0, 1]]).unwrap();
        assert_eq!(
            GaussianSynthesis.synthesize(&m),
            Err(SynthError::NotInvertible { rank: 2, size: 3 })
        );
    }

    #[test]
    fn test_input_untouched() {
        let m = random_invertible_matrix(8, 3).unwrap();
        let copy = m.clone();
        GaussianSynthesis.synthesize(&m).unwrap();
        assert_eq!(m, copy);
    }
}
