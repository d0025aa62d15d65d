//! CNOT Circuit Model
//!
//! This crate represents the output of linear reversible synthesis: an
//! ordered list of CNOT gates on `n` qubits. Each gate adds the control
//! row into the target row of a GF(2) matrix, so a circuit replayed on the
//! identity reproduces the matrix it was synthesized from.
//!
//! # Core Components
//!
//! - [`QubitId`]: qubit (matrix row) index
//! - [`CxGate`]: a CNOT with distinct control and target
//! - [`LinearCircuit`]: gate sequence with size, depth and replay
//! - [`schedule_layers`]: as-soon-as-possible depth scheduler
//!
//! # Example
//!
//! ```rust
//! use linsynth_ir::{LinearCircuit, QubitId};
//!
//! let mut circuit = LinearCircuit::new(4);
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.cx(QubitId(2), QubitId(3)).unwrap();
//! circuit.cx(QubitId(1), QubitId(2)).unwrap();
//!
//! assert_eq!(circuit.size(), 3);
//! assert_eq!(circuit.depth(), 2);
//! assert!(circuit.is_nearest_neighbor());
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod schedule;

pub use circuit::LinearCircuit;
pub use error::{IrError, IrResult};
pub use gate::CxGate;
pub use qubit::QubitId;
pub use schedule::{Layering, schedule_layers};
