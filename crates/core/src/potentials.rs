use common::{error::Error, types::Edge};

/// Computes one potential per vertex with Bellman-Ford from a synthetic
/// super-source, and rejects graphs containing a negative-weight cycle.
///
/// The super-source (index `vertex_count`, not part of the input graph)
/// is connected to every real vertex by a zero-weight edge, so every
/// vertex ends up with a finite potential even in a disconnected graph.
/// The augmented graph has `vertex_count + 1` vertices, hence exactly
/// `vertex_count` relaxation rounds; a final pass that still finds a
/// relaxable edge proves a negative cycle.
///
/// Every relaxation checks `distance[from].is_finite()` before adding the
/// weight. Infinity must stay absorbing: relaxing *from* an unreached
/// vertex with a negative edge would otherwise produce a bogus
/// smaller-than-infinity distance.
///
/// # Errors
/// Returns `Error::NegativeCycle` if any cycle in the graph has a
/// negative total weight.
pub fn solve_potentials(edges: &[Edge], vertex_count: usize) -> Result<Vec<f64>, Error> {
    let super_source = vertex_count;

    let mut augmented: Vec<Edge> = Vec::with_capacity(edges.len() + vertex_count);
    augmented.extend_from_slice(edges);
    augmented.extend((0..vertex_count).map(|vertex| (super_source, vertex, 0.0)));

    let mut distance = vec![f64::INFINITY; vertex_count + 1];
    distance[super_source] = 0.0;

    for _round in 0..vertex_count {
        for &(from, to, weight) in &augmented {
            if distance[from].is_finite() && distance[from] + weight < distance[to] {
                distance[to] = distance[from] + weight;
            }
        }
    }

    // Converged distances admit no further improvement; one that does is
    // proof of a negative cycle.
    for &(from, to, weight) in &augmented {
        if distance[from].is_finite() && distance[from] + weight < distance[to] {
            return Err(Error::NegativeCycle);
        }
    }

    distance.truncate(vertex_count);
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_graph_yields_zero_potentials() {
        // Shortest distance from the super-source is the direct zero edge
        // whenever no negative weight can undercut it.
        let edges = vec![(0, 1, 4.0), (1, 2, 0.0), (2, 0, 7.0)];

        let potentials = solve_potentials(&edges, 3).unwrap();

        assert_eq!(potentials, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn negative_edge_lowers_downstream_potential() {
        let edges = vec![(0, 1, 4.0), (1, 2, -3.0)];

        let potentials = solve_potentials(&edges, 3).unwrap();

        // Vertex 2 is best reached via super -> 1 -> 2.
        assert_eq!(potentials, vec![0.0, 0.0, -3.0]);
    }

    #[test]
    fn chained_negative_edges_accumulate() {
        let edges = vec![(0, 1, -1.0), (1, 2, -1.0), (2, 3, -1.0)];

        let potentials = solve_potentials(&edges, 4).unwrap();

        assert_eq!(potentials, vec![0.0, -1.0, -2.0, -3.0]);
    }

    #[test]
    fn negative_two_cycle_is_rejected() {
        let edges = vec![(0, 1, -1.0), (1, 0, -1.0)];

        assert_eq!(solve_potentials(&edges, 2), Err(Error::NegativeCycle));
    }

    #[test]
    fn negative_three_cycle_is_rejected() {
        // Total cycle weight 2 + 2 - 5 = -1.
        let edges = vec![(0, 1, 2.0), (1, 2, 2.0), (2, 0, -5.0)];

        assert_eq!(solve_potentials(&edges, 3), Err(Error::NegativeCycle));
    }

    #[test]
    fn zero_weight_cycle_is_accepted() {
        let edges = vec![(0, 1, 3.0), (1, 0, -3.0)];

        let potentials = solve_potentials(&edges, 2).unwrap();

        assert_eq!(potentials, vec![0.0, 0.0]);
    }

    #[test]
    fn empty_graph_yields_empty_potentials() {
        assert_eq!(solve_potentials(&[], 0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn isolated_vertices_still_get_potentials() {
        let potentials = solve_potentials(&[], 4).unwrap();
        assert_eq!(potentials, vec![0.0; 4]);
    }
}
