//! Dense binary matrices over GF(2).
//!
//! Addition is XOR and multiplication is AND, so every entry is a `bool`
//! and no numeric edge cases exist. Row and column operations are the
//! elementary operations that CNOT synthesis records as gates.

use std::fmt;
use std::ops::Range;

use ndarray::{Array2, ArrayView1, ArrayView2, azip, s};
use serde::{Deserialize, Serialize};

use crate::error::{Gf2Error, Gf2Result};

/// A dense matrix over GF(2).
///
/// Synthesis entry points require square matrices, but rectangular
/// matrices can be built so that rank and invertibility queries answer
/// for any input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BinaryMatrix {
    data: Array2<bool>,
}

impl BinaryMatrix {
    /// Create an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), false),
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::from_shape_fn((n, n), |(i, j)| i == j),
        }
    }

    /// Build a matrix from its rows.
    ///
    /// Fails with [`Gf2Error::InvalidSize`] for empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Gf2Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(Gf2Error::InvalidSize {
                size: 0,
                reason: Some("matrix has no entries".into()),
            });
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(Gf2Error::InvalidSize {
                size: num_rows,
                reason: Some(format!(
                    "row {idx} has {} entries, expected {num_cols}",
                    row.len()
                )),
            });
        }
        let flat: Vec<bool> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((num_rows, num_cols), flat).map_err(|e| {
            Gf2Error::InvalidSize {
                size: num_rows,
                reason: Some(e.to_string()),
            }
        })?;
        Ok(Self { data })
    }

    /// Build a matrix from 0/1 literals. Any non-zero byte is read as 1.
    pub fn from_bits(rows: &[&[u8]]) -> Gf2Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&b| b != 0).collect())
                .collect(),
        )
    }

    /// Wrap an existing boolean array.
    pub fn from_array(data: Array2<bool>) -> Self {
        Self { data }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    /// Read a single entry.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[[row, col]]
    }

    /// Write a single entry.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.data[[row, col]] = value;
    }

    /// View of a single row.
    pub fn row(&self, row: usize) -> ArrayView1<'_, bool> {
        self.check_row(row);
        self.data.row(row)
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, bool>> + '_ {
        self.data.rows().into_iter()
    }

    /// View of the underlying array.
    pub fn as_array(&self) -> ArrayView2<'_, bool> {
        self.data.view()
    }

    /// Number of entries equal to 1.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Whether this is a square identity matrix.
    pub fn is_identity(&self) -> bool {
        self.is_square() && self.data.indexed_iter().all(|((i, j), &b)| b == (i == j))
    }

    /// Pack the entries of `row` within `cols` into an integer.
    ///
    /// Bit `k` of the result is the entry at column `cols.start + k`.
    /// At most 64 columns can be packed.
    pub fn row_bits(&self, row: usize, cols: Range<usize>) -> u64 {
        assert!(cols.len() <= 64, "cannot pack {} columns into u64", cols.len());
        let start = cols.start;
        cols.filter(|&c| self.data[[row, c]])
            .fold(0u64, |acc, c| acc | (1u64 << (c - start)))
    }

    // =========================================================================
    // Elementary operations
    // =========================================================================

    /// `target` row ← `target` row XOR `source` row.
    ///
    /// Indices are a caller precondition: out-of-range or equal indices
    /// are programming errors and panic.
    pub fn row_xor(&mut self, target: usize, source: usize) {
        self.check_row(target);
        self.check_row(source);
        assert_ne!(target, source, "row_xor requires distinct rows");
        let (mut t, s) = self
            .data
            .multi_slice_mut((s![target, ..], s![source, ..]));
        azip!((t in &mut t, &s in &s) *t ^= s);
    }

    /// Fallible variant of [`row_xor`](Self::row_xor) for untrusted indices.
    pub fn checked_row_xor(&mut self, target: usize, source: usize) -> Gf2Result<()> {
        let n = self.num_rows();
        for index in [target, source] {
            if index >= n {
                return Err(Gf2Error::IndexOutOfRange { index, size: n });
            }
        }
        if target == source {
            return Err(Gf2Error::DuplicateRow { row: target });
        }
        self.row_xor(target, source);
        Ok(())
    }

    /// `target` column ← `target` column XOR `source` column.
    pub fn column_xor(&mut self, target: usize, source: usize) {
        self.check_col(target);
        self.check_col(source);
        assert_ne!(target, source, "column_xor requires distinct columns");
        let (mut t, s) = self
            .data
            .multi_slice_mut((s![.., target], s![.., source]));
        azip!((t in &mut t, &s in &s) *t ^= s);
    }

    /// Exchange two rows.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.check_row(i);
        self.check_row(j);
        if i == j {
            return;
        }
        let (mut a, mut b) = self.data.multi_slice_mut((s![i, ..], s![j, ..]));
        azip!((a in &mut a, b in &mut b) std::mem::swap(a, b));
    }

    /// Exchange two columns.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        self.check_col(i);
        self.check_col(j);
        if i == j {
            return;
        }
        let (mut a, mut b) = self.data.multi_slice_mut((s![.., i], s![.., j]));
        azip!((a in &mut a, b in &mut b) std::mem::swap(a, b));
    }

    // =========================================================================
    // Whole-matrix queries
    // =========================================================================

    /// Rank over GF(2), computed on a scratch copy.
    pub fn rank(&self) -> usize {
        let mut scratch = self.clone();
        let rows = scratch.num_rows();
        let mut rank = 0;

        for col in 0..scratch.num_cols() {
            if rank == rows {
                break;
            }
            let Some(pivot) = (rank..rows).find(|&r| scratch.get(r, col)) else {
                continue;
            };
            scratch.swap_rows(pivot, rank);
            for r in 0..rows {
                if r != rank && scratch.get(r, col) {
                    scratch.row_xor(r, rank);
                }
            }
            rank += 1;
        }
        rank
    }

    /// True iff the matrix is square with full rank.
    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.rank() == self.num_rows()
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// Inverse over GF(2) via Gauss-Jordan elimination.
    pub fn inverse(&self) -> Gf2Result<Self> {
        if !self.is_square() {
            return Err(Gf2Error::NotSquare {
                rows: self.num_rows(),
                cols: self.num_cols(),
            });
        }
        let n = self.num_rows();
        let mut work = self.clone();
        let mut inv = Self::identity(n);

        for col in 0..n {
            let Some(pivot) = (col..n).find(|&r| work.get(r, col)) else {
                return Err(Gf2Error::NotInvertible {
                    rank: self.rank(),
                    size: n,
                });
            };
            work.swap_rows(pivot, col);
            inv.swap_rows(pivot, col);
            for r in 0..n {
                if r != col && work.get(r, col) {
                    work.row_xor(r, col);
                    inv.row_xor(r, col);
                }
            }
        }
        Ok(inv)
    }

    /// Matrix product over GF(2). Verification only; not on any hot path.
    pub fn multiply(&self, other: &Self) -> Gf2Result<Self> {
        if self.num_cols() != other.num_rows() {
            return Err(Gf2Error::DimensionMismatch {
                left_cols: self.num_cols(),
                right_rows: other.num_rows(),
            });
        }
        let inner = self.num_cols();
        let data = Array2::from_shape_fn((self.num_rows(), other.num_cols()), |(i, j)| {
            (0..inner).fold(false, |acc, k| acc ^ (self.data[[i, k]] & other.data[[k, j]]))
        });
        Ok(Self { data })
    }

    #[inline]
    fn check_row(&self, index: usize) {
        if index >= self.num_rows() {
            panic!(
                "{}",
                Gf2Error::IndexOutOfRange {
                    index,
                    size: self.num_rows()
                }
            );
        }
    }

    #[inline]
    fn check_col(&self, index: usize) {
        if index >= self.num_cols() {
            panic!(
                "{}",
                Gf2Error::IndexOutOfRange {
                    index,
                    size: self.num_cols()
                }
            );
        }
    }
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, &bit) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(bit))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<Vec<u8>>> for BinaryMatrix {
    type Error = Gf2Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Gf2Result<Self> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        _ => Err(Gf2Error::InvalidBit { row, col, value }),
                    })
                    .collect::<Gf2Result<Vec<bool>>>()
            })
            .collect::<Gf2Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}

impl From<BinaryMatrix> for Vec<Vec<u8>> {
    fn from(matrix: BinaryMatrix) -> Self {
        matrix
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect()
    }
}
