//! Property-based tests for circuits and the depth scheduler.

use linsynth_ir::{LinearCircuit, schedule_layers};
use proptest::prelude::*;

/// Random valid `(control, target)` pairs on `n` qubits.
fn arb_circuit() -> impl Strategy<Value = LinearCircuit> {
    (2u32..=12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 1..n), 0..60).prop_map(move |pairs| {
            let gates = pairs.into_iter().map(|(c, offset)| (c, (c + offset) % n));
            LinearCircuit::from_gates(n, gates).unwrap()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn depth_bounded_by_size(circuit in arb_circuit()) {
        prop_assert!(circuit.depth() <= circuit.size());
        prop_assert_eq!(circuit.depth() == 0, circuit.size() == 0);
    }

    #[test]
    fn layers_are_qubit_disjoint(circuit in arb_circuit()) {
        let layering = circuit.layers();
        prop_assert_eq!(layering.num_gates(), circuit.size());
        for layer in layering.layers() {
            let mut seen = vec![false; circuit.num_qubits()];
            for &index in layer {
                for q in circuit.gates()[index].qubits() {
                    prop_assert!(!seen[q.index()], "qubit {} reused in a layer", q);
                    seen[q.index()] = true;
                }
            }
        }
    }

    #[test]
    fn dependent_gates_keep_order(circuit in arb_circuit()) {
        let layering = schedule_layers(circuit.num_qubits(), circuit.gates());
        let gates = circuit.gates();
        for i in 0..gates.len() {
            for j in (i + 1)..gates.len() {
                let shares = gates[i].qubits().iter().any(|&q| gates[j].acts_on(q));
                if shares {
                    prop_assert!(layering.layer_of(i) < layering.layer_of(j));
                }
            }
        }
    }

    #[test]
    fn inverse_composes_to_identity(circuit in arb_circuit()) {
        let round_trip = circuit.compose(&circuit.inverse()).unwrap();
        prop_assert!(round_trip.to_matrix().is_identity());
        prop_assert_eq!(circuit.inverse().depth(), circuit.depth());
    }

    #[test]
    fn replay_is_invertible(circuit in arb_circuit()) {
        prop_assert!(circuit.to_matrix().is_invertible());
    }

    #[test]
    fn json_round_trip(circuit in arb_circuit()) {
        let json = serde_json::to_string(&circuit).unwrap();
        let back: LinearCircuit = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, circuit);
    }
}
