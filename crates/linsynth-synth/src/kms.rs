//! Depth-bounded synthesis for linear nearest-neighbor connectivity.
//!
//! Kutin, Moulton and Smithline show that any linear reversible function
//! on `n` qubits in a line can be built with nearest-neighbor CNOTs in
//! depth at most `5n`. The construction runs on the inverse matrix in two
//! stages:
//!
//! 1. reduce it to a north-west triangular matrix (`A[i][j] = 0` whenever
//!    `i + j >= n`) with odd/even brick layers of 2-qubit boxes
//!    (Proposition 7.3, depth `2n`);
//! 2. reduce the north-west matrix to the identity with a swap network
//!    (Proposition 7.4, depth `3n`).
//!
//! Every recorded row operation acts on adjacent rows.
//!
//! Reference: S. Kutin, D. P. Moulton, L. Smithline, "Computation at a
//! distance", arXiv:quant-ph/0701194.

use tracing::{debug, instrument};

use linsynth_gf2::BinaryMatrix;
use linsynth_ir::LinearCircuit;

use crate::error::SynthResult;
use crate::synthesizer::{Synthesizer, circuit_from_ops, not_invertible, square_dimension};

/// Row additions `(control, target)` in application order.
type RowOps = Vec<(usize, usize)>;

/// Nearest-neighbor synthesizer with depth at most `5n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KmsSynthesis;

impl Synthesizer for KmsSynthesis {
    fn name(&self) -> &'static str {
        "kms"
    }

    #[instrument(name = "kms", skip_all, fields(n = matrix.num_rows()))]
    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
        let n = square_dimension(matrix)?;
        let mut work = matrix.inverse().map_err(|_| not_invertible(matrix))?;

        // The operations reduce the inverse to the identity, so in order
        // they build the matrix itself.
        let mut ops = to_north_west(&mut work, matrix).ok_or_else(|| not_invertible(matrix))?;
        ops.extend(north_west_to_identity(&mut work));
        debug_assert!(work.is_identity());

        let circuit = circuit_from_ops(n, ops)?;
        debug_assert!(circuit.is_nearest_neighbor());
        debug!(
            method = "kms",
            n,
            gates = circuit.size(),
            depth = circuit.depth(),
            "synthesis complete"
        );
        Ok(circuit)
    }
}

/// Apply and record `row[target] ^= row[control]`.
fn record(ops: &mut RowOps, mat: &mut BinaryMatrix, control: usize, target: usize) {
    ops.push((control, target));
    mat.row_xor(target, control);
}

/// Column index of the last 1 in `row`, counted from the right edge.
fn label_of(mat: &BinaryMatrix, row: usize) -> Option<usize> {
    let n = mat.num_cols();
    (0..n).find(|&j| mat.get(row, n - 1 - j))
}

/// Lower-triangular basis change of Proposition 7.3.
///
/// Returns the permuted lower-triangular matrix whose rows are the target
/// vectors `w_j`, together with the matching transformed inverse. `None`
/// if a row runs empty, which only happens for singular input.
fn lower_triangular_basis(
    mat: &BinaryMatrix,
    mat_inv: &BinaryMatrix,
) -> Option<(BinaryMatrix, BinaryMatrix)> {
    let n = mat.num_rows();
    let mut scratch = mat.clone();
    let mut upward: RowOps = Vec::new();

    for i in (0..n).rev() {
        // Keep only the last 1 of row i, using column operations leftwards.
        let last = (0..n).rev().find(|&j| scratch.get(i, j))?;
        for j in (0..last).rev() {
            if scratch.get(i, j) {
                scratch.column_xor(j, last);
            }
        }
        // Clear that column above row i with upward row operations.
        for k in (0..i).rev() {
            if scratch.get(k, last) {
                record(&mut upward, &mut scratch, i, k);
            }
        }
    }

    let mut mat_t = mat.clone();
    let mut mat_inv_t = mat_inv.clone();
    for (control, target) in upward {
        mat_t.row_xor(target, control);
        mat_inv_t.column_xor(control, target);
    }
    Some((mat_t, mat_inv_t))
}

/// Whether `row` lies in the span of every `w_l` except the one labelled `label`.
///
/// Row `l` of `mat_inv_t` lists which `w` vectors combine to the unit vector
/// `e_l`, so summing the rows selected by `row` gives its expansion.
fn avoids_label(label_pos: &[usize], mat_inv_t: &BinaryMatrix, row: &[bool], label: usize) -> bool {
    let mut needed = vec![false; row.len()];
    for (l, _) in row.iter().enumerate().filter(|(_, bit)| **bit) {
        for (acc, &bit) in needed.iter_mut().zip(mat_inv_t.row(l).iter()) {
            *acc ^= bit;
        }
    }
    !needed[label_pos[label]]
}

fn row_vec(mat: &BinaryMatrix, row: usize) -> Vec<bool> {
    mat.row(row).to_vec()
}

/// Proposition 7.3: reduce `mat` to north-west triangular form.
///
/// `mat_inv` is the inverse of the current `mat`.
fn to_north_west(mat: &mut BinaryMatrix, mat_inv: &BinaryMatrix) -> Option<RowOps> {
    let n = mat.num_rows();
    let (mat_t, mat_inv_t) = lower_triangular_basis(mat, mat_inv)?;

    let mut labels = (0..n)
        .map(|i| label_of(&mat_t, i))
        .collect::<Option<Vec<usize>>>()?;
    let mut label_pos = vec![0; n];
    for (i, &label) in labels.iter().enumerate() {
        label_pos[label] = i;
    }

    let mut ops = RowOps::new();
    brick_layers(n, |i| {
        // Labels already in order need no box.
        if labels[i] <= labels[i + 1] {
            return false;
        }
        let target_label = labels[i + 1];
        let lower = row_vec(mat, i + 1);
        if !avoids_label(&label_pos, &mat_inv_t, &lower, target_label) {
            let upper = row_vec(mat, i);
            let sum: Vec<bool> = upper.iter().zip(&lower).map(|(a, b)| a ^ b).collect();
            if avoids_label(&label_pos, &mat_inv_t, &sum, target_label) {
                record(&mut ops, mat, i, i + 1);
            } else if avoids_label(&label_pos, &mat_inv_t, &upper, target_label) {
                record(&mut ops, mat, i + 1, i);
                record(&mut ops, mat, i, i + 1);
            }
        }
        labels.swap(i, i + 1);
        true
    });
    Some(ops)
}

/// Proposition 7.4: reduce a north-west triangular matrix to the identity.
fn north_west_to_identity(mat: &mut BinaryMatrix) -> RowOps {
    let n = mat.num_rows();
    let mut labels: Vec<usize> = (0..n).rev().collect();
    let mut ops = RowOps::new();

    brick_layers(n, |i| {
        if labels[i] <= labels[i + 1] {
            return false;
        }
        // Without a 1 in the partner column the box becomes a full swap.
        if !mat.get(i, labels[i + 1]) {
            record(&mut ops, mat, i + 1, i);
        }
        record(&mut ops, mat, i, i + 1);
        record(&mut ops, mat, i + 1, i);
        labels.swap(i, i + 1);
        true
    });
    ops
}

/// Alternate even and odd brick layers over adjacent pairs `(i, i + 1)`
/// until two consecutive layers do no work. `step` returns whether the
/// pair needed a box.
fn brick_layers(n: usize, mut step: impl FnMut(usize) -> bool) {
    let mut first = 0;
    let mut idle_layers = 0;
    while idle_layers < 2 {
        let mut busy = false;
        for i in (first..n.saturating_sub(1)).step_by(2) {
            busy |= step(i);
        }
        idle_layers = if busy { 0 } else { idle_layers + 1 };
        first = 1 - first;
    }
}
