//! The CNOT (row-addition) gate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A controlled-NOT gate.
///
/// On a matrix, the gate performs `row[target] ^= row[control]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CxGate {
    control: QubitId,
    target: QubitId,
}

impl CxGate {
    /// Create a gate, rejecting `control == target`.
    pub fn new(control: impl Into<QubitId>, target: impl Into<QubitId>) -> IrResult<Self> {
        let control = control.into();
        let target = target.into();
        if control == target {
            return Err(IrError::DuplicateQubit { qubit: control });
        }
        Ok(Self { control, target })
    }

    /// The control qubit (source row).
    #[inline]
    pub fn control(&self) -> QubitId {
        self.control
    }

    /// The target qubit (row that is modified).
    #[inline]
    pub fn target(&self) -> QubitId {
        self.target
    }

    /// Both qubits, control first.
    #[inline]
    pub fn qubits(&self) -> [QubitId; 2] {
        [self.control, self.target]
    }

    /// Whether the gate touches `qubit`.
    #[inline]
    pub fn acts_on(&self, qubit: QubitId) -> bool {
        self.control == qubit || self.target == qubit
    }

    /// Whether control and target are adjacent on a line.
    #[inline]
    pub fn is_nearest_neighbor(&self) -> bool {
        self.control.distance(self.target) == 1
    }
}

impl fmt::Display for CxGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cx {}, {}", self.control, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_accessors() {
        let g = CxGate::new(QubitId(0), QubitId(2)).unwrap();
        assert_eq!(g.control(), QubitId(0));
        assert_eq!(g.target(), QubitId(2));
        assert!(g.acts_on(QubitId(2)));
        assert!(!g.acts_on(QubitId(1)));
        assert!(!g.is_nearest_neighbor());
        assert_eq!(g.to_string(), "cx q0, q2");
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        assert_eq!(
            CxGate::new(3u32, 3u32),
            Err(IrError::DuplicateQubit { qubit: QubitId(3) })
        );
    }
}
