//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is not below the circuit width.
    #[error("Qubit {qubit} out of range for circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// Control and target of a CNOT coincide.
    #[error("Duplicate qubit {qubit} in cx gate")]
    DuplicateQubit {
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Two objects that must agree on width do not.
    #[error("Width mismatch: circuit has {circuit} qubits, other operand has {other}")]
    WidthMismatch {
        /// Width of this circuit.
        circuit: usize,
        /// Width of the other circuit or matrix.
        other: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
