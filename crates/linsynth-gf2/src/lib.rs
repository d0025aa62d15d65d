//! Linear algebra over GF(2) for CNOT synthesis.
//!
//! This crate provides the binary matrix type consumed by the synthesis
//! engines, together with a deterministic generator of random invertible
//! matrices used for testing and benchmarking.
//!
//! # Core Components
//!
//! - [`BinaryMatrix`]: dense `bool` matrix with row/column XOR, swaps,
//!   rank, inverse and product
//! - [`random_invertible_matrix`]: seed-reproducible invertible matrices
//!   (mapping versioned by [`GENERATOR_VERSION`])
//!
//! # Example
//!
//! ```rust
//! use linsynth_gf2::{BinaryMatrix, random_invertible_matrix};
//!
//! let m = random_invertible_matrix(6, 0).unwrap();
//! assert_eq!(m.rank(), 6);
//! assert_eq!(m, random_invertible_matrix(6, 0).unwrap());
//!
//! let mut id = BinaryMatrix::identity(2);
//! id.row_xor(1, 0);
//! assert_eq!(id, BinaryMatrix::from_bits(&[&[1, 0], &[1, 1]]).unwrap());
//! ```

pub mod error;
pub mod matrix;
pub mod random;

pub use error::{Gf2Error, Gf2Result};
pub use matrix::BinaryMatrix;
pub use random::{
    GENERATOR_VERSION, mixing_rounds, random_invertible_matrix, random_invertible_matrix_with_rng,
    random_matrix,
};
