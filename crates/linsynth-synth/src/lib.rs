//! Linear Reversible Circuit Synthesis
//!
//! This crate turns an invertible matrix over GF(2) into a sequence of
//! CNOT gates. Replaying the gates in order on the identity, each as
//! `row[target] ^= row[control]`, reproduces the input matrix exactly.
//!
//! # Engines
//!
//! | Engine | Gates | Depth | Connectivity |
//! |--------|-------|-------|--------------|
//! | [`GaussianSynthesis`] | O(n²) | O(n²) | all-to-all |
//! | [`PmhSynthesis`] (default) | O(n²/log n) | O(n²/log n) | all-to-all |
//! | [`KmsSynthesis`] | ≈2.5n² | ≤ 5n | line |
//!
//! All engines implement [`Synthesizer`]; [`SynthesisMethod`] selects one
//! by name. [`Verified`] wraps any engine with a replay check.
//!
//! # Example
//!
//! ```rust
//! use linsynth_gf2::random_invertible_matrix;
//! use linsynth_synth::{synthesize, verify_circuit};
//!
//! let matrix = random_invertible_matrix(16, 7).unwrap();
//! let circuit = synthesize(&matrix).unwrap();
//!
//! verify_circuit(&matrix, &circuit).unwrap();
//! assert!(circuit.depth() <= circuit.size());
//! ```
//!
//! # Custom Engines
//!
//! ```rust
//! use linsynth_gf2::BinaryMatrix;
//! use linsynth_ir::LinearCircuit;
//! use linsynth_synth::{GaussianSynthesis, SynthResult, Synthesizer, Verified};
//!
//! struct Baseline;
//!
//! impl Synthesizer for Baseline {
//!     fn name(&self) -> &str { "baseline" }
//!
//!     fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
//!         GaussianSynthesis.synthesize(matrix)
//!     }
//! }
//!
//! let checked = Verified::new(Baseline);
//! assert!(checked.synthesize(&BinaryMatrix::identity(3)).is_ok());
//! ```

pub mod error;
pub mod gaussian;
pub mod kms;
pub mod pmh;
pub mod synthesizer;
pub mod verification;

pub use error::{SynthError, SynthResult};
pub use gaussian::GaussianSynthesis;
pub use kms::KmsSynthesis;
pub use pmh::{MAX_SECTION_SIZE, PmhSynthesis, default_section_size};
pub use synthesizer::{SynthesisMethod, Synthesizer};
pub use verification::{Verified, verify_circuit};

use linsynth_gf2::BinaryMatrix;
use linsynth_ir::LinearCircuit;

/// Synthesize `matrix` with the default engine ([`PmhSynthesis`]).
///
/// Fails with [`SynthError::NotInvertible`] when the matrix is singular.
pub fn synthesize(matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
    PmhSynthesis::new().synthesize(matrix)
}
