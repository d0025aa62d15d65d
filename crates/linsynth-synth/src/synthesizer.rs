//! Synthesizer trait and engine selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use linsynth_gf2::{BinaryMatrix, Gf2Error};
use linsynth_ir::LinearCircuit;

use crate::error::{SynthError, SynthResult};
use crate::gaussian::GaussianSynthesis;
use crate::kms::KmsSynthesis;
use crate::pmh::PmhSynthesis;

/// Something that turns an invertible matrix into a CNOT circuit.
///
/// Implementations hold configuration only; nothing is carried across
/// calls. The returned circuit, replayed on the identity, must equal the
/// input matrix.
pub trait Synthesizer: Send + Sync {
    /// Get the name of this engine.
    fn name(&self) -> &str;

    /// Synthesize a circuit for `matrix`.
    ///
    /// Fails with [`SynthError::NotSquare`] or [`SynthError::NotInvertible`]
    /// for unusable input.
    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit>;
}

impl<S: Synthesizer + ?Sized> Synthesizer for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn synthesize(&self, matrix: &BinaryMatrix) -> SynthResult<LinearCircuit> {
        (**self).synthesize(matrix)
    }
}

/// Available synthesis engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisMethod {
    /// Plain Gauss-Jordan elimination.
    Gaussian,
    /// Patel-Markov-Hayes blocked elimination.
    #[default]
    Pmh,
    /// Kutin-Moulton-Smithline nearest-neighbor synthesis.
    Kms,
}

impl SynthesisMethod {
    /// All engines, in report order.
    pub const ALL: [SynthesisMethod; 3] = [Self::Gaussian, Self::Pmh, Self::Kms];

    /// Lowercase name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Pmh => "pmh",
            Self::Kms => "kms",
        }
    }

    /// Engine with default parameters.
    pub fn synthesizer(self) -> Box<dyn Synthesizer> {
        match self {
            Self::Gaussian => Box::new(GaussianSynthesis),
            Self::Pmh => Box::new(PmhSynthesis::new()),
            Self::Kms => Box::new(KmsSynthesis),
        }
    }

    /// Engine with an explicit PMH section size.
    ///
    /// The section size only applies to [`SynthesisMethod::Pmh`]; other
    /// engines ignore it.
    pub fn configured(self, section_size: Option<usize>) -> SynthResult<Box<dyn Synthesizer>> {
        match (self, section_size) {
            (Self::Pmh, Some(size)) => Ok(Box::new(PmhSynthesis::with_section_size(size)?)),
            _ => Ok(self.synthesizer()),
        }
    }
}

impl fmt::Display for SynthesisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynthesisMethod {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gaussian" | "gauss" => Ok(Self::Gaussian),
            "pmh" => Ok(Self::Pmh),
            "kms" | "lnn" => Ok(Self::Kms),
            _ => Err(SynthError::InvalidConfiguration(format!(
                "unknown synthesis method '{s}' (expected gaussian, pmh or kms)"
            ))),
        }
    }
}

/// Dimension of a square, non-empty matrix.
pub(crate) fn square_dimension(matrix: &BinaryMatrix) -> SynthResult<usize> {
    if !matrix.is_square() {
        return Err(SynthError::NotSquare {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
        });
    }
    match matrix.num_rows() {
        0 => Err(Gf2Error::invalid_size(0).into()),
        n => Ok(n),
    }
}

/// The error reported when elimination runs out of pivots.
pub(crate) fn not_invertible(matrix: &BinaryMatrix) -> SynthError {
    SynthError::NotInvertible {
        rank: matrix.rank(),
        size: matrix.num_rows(),
    }
}

/// Build a circuit whose gates are `ops` in the given order.
pub(crate) fn circuit_from_ops<I>(n: usize, ops: I) -> SynthResult<LinearCircuit>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let width = u32::try_from(n).map_err(|_| Gf2Error::InvalidSize {
        size: n,
        reason: Some("more rows than addressable qubits".into()),
    })?;
    Ok(LinearCircuit::from_gates(width, ops)?)
}
