use common::types::{NO_EDGE, SquareMatrix};

/// Shifts every finite edge weight by the vertex potentials:
/// `R[u][v] = graph[u][v] + h[u] - h[v]`.
///
/// Absent edges stay [`NO_EDGE`] and the diagonal is pinned to 0 by
/// convention (it is never read as an edge). When the potentials come
/// from a converged Bellman-Ford run, `h[v] <= h[u] + w(u, v)` holds for
/// every edge, so all transformed weights are >= 0 — the precondition
/// Dijkstra needs. A finite zero original weight is a genuine zero-cost
/// edge and is transformed like any other entry.
pub fn reweight(graph: &SquareMatrix, potentials: &[f64]) -> SquareMatrix {
    let vertex_count = graph.size();
    let mut reweighted = SquareMatrix::splat(vertex_count, NO_EDGE);

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from == to {
                reweighted.set(from, to, 0.0);
                continue;
            }

            let weight = graph.get(from, to);
            if weight.is_finite() {
                reweighted.set(from, to, weight + potentials[from] - potentials[to]);
            }
        }
    }

    reweighted
}
