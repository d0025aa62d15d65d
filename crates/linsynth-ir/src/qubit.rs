//! Qubit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit (equivalently, a matrix row) within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The qubit index as a matrix row index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Distance between two qubits on a line.
    #[inline]
    pub fn distance(self, other: QubitId) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(QubitId::from(7usize).to_string(), "q7");
    }

    #[test]
    fn test_qubit_distance() {
        assert_eq!(QubitId(3).distance(QubitId(1)), 2);
        assert_eq!(QubitId(1).distance(QubitId(2)), 1);
        assert_eq!(QubitId(4).index(), 4);
    }
}
