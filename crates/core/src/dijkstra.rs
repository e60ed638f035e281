use common::types::SquareMatrix;

/// Single-source shortest paths on the reweighted graph, mapped back to
/// the original weight scale.
///
/// Runs the classic dense Dijkstra: `vertex_count - 1` rounds of picking
/// the nearest unvisited vertex (lowest index on ties, so traversal order
/// is deterministic) and relaxing its outgoing finite edges. The loop
/// stops early once every unvisited vertex sits at infinity; those
/// vertices are unreachable, not an error. Relaxations are guarded by a
/// finiteness check on `dist[from]` before the addition.
///
/// The reweighted distances are converted back with
/// `dist[v] - h[source] + h[v]`; infinite entries stay infinite, meaning
/// the pair is unreachable in the original graph too.
pub fn shortest_paths_from(
    reweighted: &SquareMatrix,
    source: usize,
    potentials: &[f64],
) -> Vec<f64> {
    let vertex_count = reweighted.size();
    let mut dist = vec![f64::INFINITY; vertex_count];
    let mut visited = vec![false; vertex_count];
    dist[source] = 0.0;

    for _ in 0..vertex_count.saturating_sub(1) {
        let Some(nearest) = nearest_unvisited(&dist, &visited) else {
            break;
        };
        visited[nearest] = true;

        for neighbor in 0..vertex_count {
            if neighbor == nearest || visited[neighbor] {
                continue;
            }
            let weight = reweighted.get(nearest, neighbor);
            if weight.is_finite()
                && dist[nearest].is_finite()
                && dist[nearest] + weight < dist[neighbor]
            {
                dist[neighbor] = dist[nearest] + weight;
            }
        }
    }

    for (vertex, entry) in dist.iter_mut().enumerate() {
        if entry.is_finite() {
            *entry = *entry - potentials[source] + potentials[vertex];
        }
    }

    dist
}

/// Index of the unvisited vertex with the smallest tentative distance,
/// or `None` if every unvisited vertex is still at infinity.
fn nearest_unvisited(dist: &[f64], visited: &[bool]) -> Option<usize> {
    let mut nearest: Option<usize> = None;

    for vertex in 0..dist.len() {
        if visited[vertex] || dist[vertex].is_infinite() {
            continue;
        }
        match nearest {
            Some(best) if dist[vertex] >= dist[best] => {}
            _ => nearest = Some(vertex),
        }
    }

    nearest
}
