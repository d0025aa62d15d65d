//! Depth scheduling of CNOT sequences.
//!
//! The scheduler places every gate in the earliest layer after the last
//! gate that touched either of its qubits. Gates on disjoint qubits can
//! share a layer; gates sharing a qubit keep their sequence order. This
//! as-soon-as-possible placement is optimal for that dependency model, so
//! the number of layers is the circuit depth.
//!
//! Scheduling only reads the gate list, so any synthesis strategy can be
//! measured with the same pass.

use serde::{Deserialize, Serialize};

use crate::gate::CxGate;

/// A partition of a gate sequence into parallel layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layering {
    /// Gate indices per layer, in sequence order within each layer.
    layers: Vec<Vec<usize>>,
    /// Zero-based layer of each gate, indexed like the gate sequence.
    gate_layer: Vec<usize>,
}

impl Layering {
    /// Number of layers, i.e. the circuit depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Number of scheduled gates.
    #[inline]
    pub fn num_gates(&self) -> usize {
        self.gate_layer.len()
    }

    /// The layers, each holding indices into the gate sequence.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Zero-based layer assigned to gate `index`.
    pub fn layer_of(&self, index: usize) -> Option<usize> {
        self.gate_layer.get(index).copied()
    }

    /// Largest number of gates in a single layer.
    pub fn max_width(&self) -> usize {
        self.layers.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Schedule `gates` on `num_qubits` wires into as few layers as possible.
///
/// Every gate qubit must be below `num_qubits`; circuits guarantee this on
/// construction.
pub fn schedule_layers(num_qubits: usize, gates: &[CxGate]) -> Layering {
    // Number of layers already occupied on each wire (0 = untouched).
    let mut frontier = vec![0usize; num_qubits];
    let mut layers: Vec<Vec<usize>> = Vec::new();
    let mut gate_layer = Vec::with_capacity(gates.len());

    for (index, gate) in gates.iter().enumerate() {
        let c = gate.control().index();
        let t = gate.target().index();
        let layer = frontier[c].max(frontier[t]);
        frontier[c] = layer + 1;
        frontier[t] = layer + 1;

        if layer == layers.len() {
            layers.push(Vec::new());
        }
        layers[layer].push(index);
        gate_layer.push(layer);
    }

    Layering { layers, gate_layer }
}
