//! CNOT-only circuits implementing linear reversible functions.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use linsynth_gf2::BinaryMatrix;

use crate::error::{IrError, IrResult};
use crate::gate::CxGate;
use crate::qubit::QubitId;
use crate::schedule::{Layering, schedule_layers};

/// An ordered sequence of CNOT gates on a fixed number of qubits.
///
/// Replaying the gates in order against the identity matrix, each as
/// `row[target] ^= row[control]`, yields the matrix the circuit implements
/// (see [`to_matrix`](Self::to_matrix)).
///
/// The layering used for [`depth`](Self::depth) is computed on first use
/// and cached until the gate list changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CircuitRepr", into = "CircuitRepr")]
pub struct LinearCircuit {
    /// Number of qubits (rows of the implemented matrix).
    num_qubits: u32,
    /// Gates in application order.
    gates: Vec<CxGate>,
    /// Lazily computed layering.
    layering: OnceLock<Layering>,
}

impl LinearCircuit {
    /// Create an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self::with_capacity(num_qubits, 0)
    }

    /// Create an empty circuit with room for `capacity` gates.
    pub fn with_capacity(num_qubits: u32, capacity: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::with_capacity(capacity),
            layering: OnceLock::new(),
        }
    }

    /// Build a circuit from `(control, target)` pairs.
    pub fn from_gates<I, Q>(num_qubits: u32, gates: I) -> IrResult<Self>
    where
        I: IntoIterator<Item = (Q, Q)>,
        Q: Into<QubitId>,
    {
        let gates = gates.into_iter();
        let mut circuit = Self::with_capacity(num_qubits, gates.size_hint().0);
        for (control, target) in gates {
            circuit.cx(control.into(), target.into())?;
        }
        Ok(circuit)
    }

    /// Append a CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        for qubit in [control, target] {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        let gate = CxGate::new(control, target)?;
        self.gates.push(gate);
        self.layering.take();
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[CxGate] {
        &self.gates
    }

    /// Iterate over the gates.
    pub fn iter(&self) -> std::slice::Iter<'_, CxGate> {
        self.gates.iter()
    }

    /// Number of gates.
    #[inline]
    pub fn size(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Minimum number of parallel layers.
    pub fn depth(&self) -> usize {
        self.layers().depth()
    }

    /// The parallel layering of the gates.
    pub fn layers(&self) -> &Layering {
        self.layering
            .get_or_init(|| schedule_layers(self.num_qubits(), &self.gates))
    }

    /// Whether every gate acts on adjacent qubits of a line.
    pub fn is_nearest_neighbor(&self) -> bool {
        self.gates.iter().all(CxGate::is_nearest_neighbor)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// The inverse circuit. CNOTs are self-inverse, so this is the reversed sequence.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            num_qubits: self.num_qubits,
            gates: self.gates.iter().rev().copied().collect(),
            layering: OnceLock::new(),
        }
    }

    /// This circuit followed by `other`.
    pub fn compose(&self, other: &LinearCircuit) -> IrResult<Self> {
        if self.num_qubits != other.num_qubits {
            return Err(IrError::WidthMismatch {
                circuit: self.num_qubits(),
                other: other.num_qubits(),
            });
        }
        let mut gates = Vec::with_capacity(self.size() + other.size());
        gates.extend_from_slice(&self.gates);
        gates.extend_from_slice(&other.gates);
        Ok(Self {
            num_qubits: self.num_qubits,
            gates,
            layering: OnceLock::new(),
        })
    }

    /// Apply every gate, in order, as a row operation on `matrix`.
    pub fn apply_to(&self, matrix: &mut BinaryMatrix) -> IrResult<()> {
        if matrix.num_rows() != self.num_qubits() {
            return Err(IrError::WidthMismatch {
                circuit: self.num_qubits(),
                other: matrix.num_rows(),
            });
        }
        for gate in &self.gates {
            matrix.row_xor(gate.target().index(), gate.control().index());
        }
        Ok(())
    }

    /// The matrix implemented by the circuit: its gates replayed on the identity.
    pub fn to_matrix(&self) -> BinaryMatrix {
        let mut matrix = BinaryMatrix::identity(self.num_qubits());
        for gate in &self.gates {
            matrix.row_xor(gate.target().index(), gate.control().index());
        }
        matrix
    }
}

impl PartialEq for LinearCircuit {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits && self.gates == other.gates
    }
}

impl Eq for LinearCircuit {}

impl<'a> IntoIterator for &'a LinearCircuit {
    type Item = &'a CxGate;
    type IntoIter = std::slice::Iter<'a, CxGate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

/// Wire format: `{ "num_qubits": n, "gates": [[control, target], ...] }`.
#[derive(Serialize, Deserialize)]
struct CircuitRepr {
    num_qubits: u32,
    gates: Vec<(u32, u32)>,
}

impl TryFrom<CircuitRepr> for LinearCircuit {
    type Error = IrError;

    fn try_from(repr: CircuitRepr) -> IrResult<Self> {
        LinearCircuit::from_gates(repr.num_qubits, repr.gates)
    }
}

impl From<LinearCircuit> for CircuitRepr {
    fn from(circuit: LinearCircuit) -> Self {
        CircuitRepr {
            num_qubits: circuit.num_qubits,
            gates: circuit
                .gates
                .iter()
                .map(|g| (g.control().0, g.target().0))
                .collect(),
        }
    }
}
