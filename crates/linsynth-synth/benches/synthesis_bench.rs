//! Benchmarks for the synthesis engines
//!
//! Run with: cargo bench -p linsynth-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linsynth_gf2::random_invertible_matrix;
use linsynth_synth::SynthesisMethod;

/// Benchmark every engine across matrix sizes
fn bench_engines(c: &mut Criterion) {
    for method in SynthesisMethod::ALL {
        let mut group = c.benchmark_group(format!("synthesize_{method}"));
        let engine = method.synthesizer();

        for n in &[8, 16, 32, 64, 128] {
            let matrix = random_invertible_matrix(*n, 0).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
                b.iter(|| engine.synthesize(black_box(m)).unwrap());
            });
        }

        group.finish();
    }
}

/// Benchmark the generator alone
fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_invertible_matrix");

    for n in &[16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| random_invertible_matrix(black_box(n), black_box(42)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark depth scheduling of synthesized circuits
fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");

    for n in &[32, 128] {
        let matrix = random_invertible_matrix(*n, 1).unwrap();
        let circuit = linsynth_synth::synthesize(&matrix).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &circuit, |b, circuit| {
            b.iter(|| linsynth_ir::schedule_layers(circuit.num_qubits(), black_box(circuit.gates())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines, bench_generator, bench_depth);
criterion_main!(benches);
