//! Error types for the GF(2) crate.

use thiserror::Error;

/// Errors that can occur in GF(2) matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Gf2Error {
    /// Requested matrix size is zero or the row data is ragged.
    #[error("Invalid matrix size {size}{}", format_reason(.reason))]
    InvalidSize {
        /// The offending size.
        size: usize,
        /// Optional detail about what was malformed.
        reason: Option<String>,
    },

    /// Operation requires a square matrix.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix does not have full rank.
    #[error("Matrix is not invertible: rank {rank} < {size}")]
    NotInvertible {
        /// Rank over GF(2).
        rank: usize,
        /// Dimension of the square matrix.
        size: usize,
    },

    /// Row or column index outside the matrix.
    #[error("Index {index} out of range for dimension {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The dimension it was checked against.
        size: usize,
    },

    /// A row operation names the same row as source and target.
    #[error("Row {row} cannot be added to itself")]
    DuplicateRow {
        /// The repeated row index.
        row: usize,
    },

    /// Inner dimensions of a product do not agree.
    #[error("Cannot multiply: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch {
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
    },

    /// Serialized entry is neither 0 nor 1.
    #[error("Invalid bit value {value} at ({row}, {col})")]
    InvalidBit {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The value found.
        value: u8,
    },
}

impl Gf2Error {
    /// Shorthand for a size error without extra context.
    pub fn invalid_size(size: usize) -> Self {
        Gf2Error::InvalidSize { size, reason: None }
    }
}

#[allow(clippy::ref_option)]
fn format_reason(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" ({r})"),
        None => String::new(),
    }
}

/// Result type for GF(2) operations.
pub type Gf2Result<T> = Result<T, Gf2Error>;
