use common::types::{Edge, SquareMatrix};

/// Converts an adjacency matrix into a sparse edge list.
///
/// Scans the matrix row-major and keeps exactly the triples
/// `(u, v, graph[u][v])` for `u != v` where the entry is finite:
/// self-loops and `NO_EDGE` entries are dropped. The output order is the
/// scan order, and no deduplication is needed because the matrix holds at
/// most one weight per ordered pair.
pub fn edge_list(graph: &SquareMatrix) -> Vec<Edge> {
    let vertex_count = graph.size();
    let mut edges = Vec::new();

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            let weight = graph.get(from, to);
            if from != to && weight.is_finite() {
                edges.push((from, to, weight));
            }
        }
    }

    edges
}
