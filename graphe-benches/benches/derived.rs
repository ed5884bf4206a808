//! Derived-graph builder benchmarks.
//!
//! Complement and line graph sizes grow quadratically, so these runs use
//! smaller graphs than the traversal benchmarks.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use graphe_benches::{
    error::BenchSetupError,
    source::{SyntheticConfig, SyntheticGraph},
};
use graphe_core::{Graph, GraphError, Orientation, complement, line_graph, transpose};

/// Seed used for all synthetic graphs in this benchmark.
const SEED: u64 = 11;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 300];

/// Link probability of every source graph.
const PROBABILITY: f64 = 0.05;

type Builder = fn(&Graph) -> Result<Graph, GraphError>;

const BUILDERS: &[(&str, Builder)] = &[
    ("complement", complement),
    ("transpose", transpose),
    ("line_graph", line_graph),
];

fn derived_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let sources = VERTEX_COUNTS
        .iter()
        .map(|&vertex_count| {
            SyntheticGraph::generate(&SyntheticConfig {
                vertex_count,
                probability: PROBABILITY,
                orientation: Orientation::Undirected,
                seed: SEED,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for &(name, build) in BUILDERS {
        let mut group = c.benchmark_group(name);
        group.sample_size(20);
        for source in &sources {
            group.bench_with_input(
                BenchmarkId::from_parameter(source.params()),
                source.graph(),
                |b, graph| {
                    b.iter(|| build(graph));
                },
            );
        }
        group.finish();
    }
    Ok(())
}

fn derived(c: &mut Criterion) {
    if let Err(err) = derived_impl(c) {
        panic!("derived benchmark setup failed: {err}");
    }
}

criterion_group!(benches, derived);
criterion_main!(benches);
