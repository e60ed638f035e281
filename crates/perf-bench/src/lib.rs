// ----------------------------
// Benchmark graph generators
// ----------------------------

use common::types::{NO_EDGE, SquareMatrix};

pub const DENSE_NUM_NODES: usize = 300;
pub const SPARSE_NUM_NODES: usize = 2_000;
pub const CHORD_STRIDE: usize = 5;

/// Per-vertex offset used to shift generated weights. Shifting a
/// non-negative base by `offset(v) - offset(u)` telescopes to zero around
/// any cycle, so the generated graphs contain negative edges but never a
/// negative cycle.
fn offset(vertex: usize) -> f64 {
    (vertex % 7) as f64
}

/// Base weight varied by index so the compiler cannot fold the
/// computation away during benchmarking.
fn base_weight(from: usize, to: usize) -> f64 {
    1.0 + ((from * 31 + to * 17) % 97) as f64 / 10.0
}

/// Complete directed graph with negative-but-cycle-safe weights.
pub fn generate_dense_graph(num_nodes: usize) -> SquareMatrix {
    let mut graph = SquareMatrix::splat(num_nodes, NO_EDGE);

    for from in 0..num_nodes {
        for to in 0..num_nodes {
            if from != to {
                graph.set(from, to, base_weight(from, to) + offset(to) - offset(from));
            }
        }
    }

    graph
}

/// Directed ring plus forward chords every [`CHORD_STRIDE`] vertices.
pub fn generate_sparse_graph(num_nodes: usize) -> SquareMatrix {
    let mut graph = SquareMatrix::splat(num_nodes, NO_EDGE);

    for from in 0..num_nodes {
        let next = (from + 1) % num_nodes;
        graph.set(from, next, base_weight(from, next) + offset(next) - offset(from));

        let chord = (from + CHORD_STRIDE) % num_nodes;
        graph.set(from, chord, base_weight(from, chord) + offset(chord) - offset(from));
    }

    graph
}

/// Sum of the finite entries of a distance matrix, used as the
/// benchmark checksum.
pub fn finite_checksum(distances: &SquareMatrix) -> f64 {
    let mut checksum = 0.0;
    for row in 0..distances.size() {
        for entry in distances.row(row) {
            if entry.is_finite() {
                checksum += entry;
            }
        }
    }
    checksum
}
