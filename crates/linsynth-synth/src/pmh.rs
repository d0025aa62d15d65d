//! Patel-Markov-Hayes blocked elimination.
//!
//! The columns are split into sections of `m` columns. Before eliminating
//! a section column by column, every row whose bits inside the section
//! repeat an earlier row's bits is cleared with a single row addition from
//! that earlier row. With `m ≈ log₂ n` most sub-rows are removed this way,
//! which brings the gate count from O(n²) down to O(n²/log n).
//!
//! Reference: K. N. Patel, I. L. Markov, J. P. Hayes, "Optimal synthesis of
//! linear reversible circuits", Quantum Inf. Comput. 8(3), 2008.

use std::ops::Range;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, trace};

use linsynth_gf2::BinaryMatrix;
use linsynth_ir::LinearCircuit;

use crate::error::{SynthError, SynthResult};
use crate::synthesizer::{Synthesizer, circuit_from_ops, not_invertible, square_dimension};

/// Largest section size; section patterns are packed into a `u64`.
pub const MAX_SECTION_SIZE: usize = 64;

/// Calibration constant for the default section size.
const ALPHA: f64 = 0.56;

/// Default section size for an `n x n` matrix: `max(2, ⌊0.56 · log₂ n⌋)`.
pub fn default_section_size(n: usize) -> usize {
    if n < 2 {
        return 2;
    }
    let size = (ALPHA * (n as f64).log2()).floor() as usize;
    size.clamp(2, MAX_SECTION_SIZE)
}

/// Blocked-elimination synthesizer (the default engine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PmhSynthesis {
    section_size: Option<usize>,
}

impl PmhSynthesis {
    /// Synthesizer using [`default_section_size`].
    pub fn new() -> Self {
        Self { section_size: None }
    }

    /// Synthesizer with a fixed section size in `1..=64`.
    pub fn with_section_size(section_size: usize) -> SynthResult<Self> {
        if section_size == 0 || section_size > MAX_SECTION_SIZE {
            return Err(SynthError::InvalidConfiguration(format!(
                "section size must be between 1 and {MAX_SECTION_SIZE}, got {section_size}"
            )));
        }
        Ok(Self {
            section_size: Some(section_size),
        })
    }

    /// Section size used for an `n x n` matrix.
    pub fn section_size_for(&self, n: usize) -> usize {
        self.section_size.unwrap_or_else(|| default_section_size(n))
    }
}

impl Synthesizer for PmhSynthesis {
    fn name(&self) -> &'static str {
        "pmh"
    }

    #[instrument(name = "pmh", skip_all, fields(n = matrix.num_rows()))]
    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
        let n = square_dimension(matrix)?;
        let section_size = self.section_size_for(n);
        let mut work = matrix.clone();
        let mut ops = Vec::new();

        // Downward pass leaves an upper triangle with unit diagonal. The
        // upward pass runs the same routine on the index-reversed matrix,
        // where that triangle is lower.
        Oriented::new(&mut work, &mut ops, false)
            .eliminate_below(section_size)
            .ok_or_else(|| not_invertible(matrix))?;
        let lower_ops = ops.len();
        Oriented::new(&mut work, &mut ops, true)
            .eliminate_below(section_size)
            .ok_or_else(|| not_invertible(matrix))?;
        debug_assert!(work.is_identity());
        trace!(lower_ops, upper_ops = ops.len() - lower_ops, "reduction finished");

        let circuit = circuit_from_ops(n, ops.into_iter().rev())?;
        debug!(
            method = "pmh",
            n,
            section_size,
            gates = circuit.size(),
            "synthesis complete"
        );
        Ok(circuit)
    }
}

/// A working matrix seen either as-is or with every row and column index
/// mirrored (`i ↦ n - 1 - i`). Row additions are recorded in the
/// original index space as `(control, target)`.
struct Oriented<'a> {
    matrix: &'a mut BinaryMatrix,
    ops: &'a mut Vec<(usize, usize)>,
    reversed: bool,
    n: usize,
}

impl<'a> Oriented<'a> {
    fn new(matrix: &'a mut BinaryMatrix, ops: &'a mut Vec<(usize, usize)>, reversed: bool) -> Self {
        let n = matrix.num_rows();
        Self {
            matrix,
            ops,
            reversed,
            n,
        }
    }

    #[inline]
    fn index(&self, i: usize) -> usize {
        if self.reversed { self.n - 1 - i } else { i }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> bool {
        self.matrix.get(self.index(row), self.index(col))
    }

    /// `row[target] ^= row[control]`, recorded.
    fn add_row(&mut self, control: usize, target: usize) {
        let (control, target) = (self.index(control), self.index(target));
        self.matrix.row_xor(target, control);
        self.ops.push((control, target));
    }

    /// Bits of `row` inside `cols`, bit `k` for column `cols.start + k`.
    fn pattern(&self, row: usize, cols: Range<usize>) -> u64 {
        if !self.reversed {
            return self.matrix.row_bits(row, cols);
        }
        let start = cols.start;
        cols.filter(|&c| self.get(row, c))
            .fold(0u64, |acc, c| acc | (1u64 << (c - start)))
    }

    /// Clear everything below the diagonal, section by section.
    ///
    /// Returns `None` when a column has no pivot on or below the diagonal,
    /// i.e. the matrix is singular.
    fn eliminate_below(&mut self, section_size: usize) -> Option<()> {
        let n = self.n;
        for start in (0..n).step_by(section_size) {
            let section = start..(start + section_size).min(n);

            // Every nonzero pattern keeps exactly one representative row:
            // a later row with the same pattern is cleared on sight, so it
            // never competes with the representative. The preference for the
            // most recently produced matching row is therefore always met:
            // there is never more than one candidate to choose from.
            let mut patterns: FxHashMap<u64, usize> = FxHashMap::default();
            for row in start..n {
                let pattern = self.pattern(row, section.clone());
                if pattern == 0 {
                    continue;
                }
                match patterns.get(&pattern) {
                    Some(&first) => self.add_row(first, row),
                    None => {
                        patterns.insert(pattern, row);
                    }
                }
            }

            for col in section {
                if !self.get(col, col) {
                    let pivot = (col + 1..n).find(|&r| self.get(r, col))?;
                    self.add_row(pivot, col);
                }
                for row in col + 1..n {
                    if self.get(row, col) {
                        self.add_row(col, row);
                    }
                }
            }
        }
        Some(())
    }
}
