use common::{
    error::Error,
    types::{NO_EDGE, SquareMatrix},
};
use rayon::prelude::*;
use tracing::debug;

use crate::dijkstra::shortest_paths_from;
use crate::edges::edge_list;
use crate::potentials::solve_potentials;
use crate::reweight::reweight;
use crate::traits::AllPairsSolver;

/// All-pairs shortest paths via Johnson's algorithm.
///
/// Handles negative edge weights (but not negative cycles) by computing
/// Bellman-Ford potentials from a synthetic super-source, reweighting
/// every edge to a non-negative value, and running one Dijkstra per
/// source vertex on the reweighted graph. Each phase hands an immutable
/// value to the next, so the per-source searches share only read-only
/// data and run on rayon's pool without any locking; collecting in
/// source order keeps the output deterministic.
pub struct JohnsonSolver;

impl AllPairsSolver for JohnsonSolver {
    /// Computes the full distance matrix for `graph`.
    ///
    /// # Errors
    /// Returns `Error::NegativeCycle` if the graph contains a
    /// negative-weight cycle; no partial result is produced.
    fn shortest_distances(&self, graph: &SquareMatrix) -> Result<SquareMatrix, Error> {
        let vertex_count = graph.size();

        let edges = edge_list(graph);
        debug!(
            vertices = vertex_count,
            edges = edges.len(),
            "extracted edge list"
        );

        let potentials = solve_potentials(&edges, vertex_count)?;
        debug!("potentials converged without a negative cycle");

        let reweighted = reweight(graph, &potentials);

        let rows: Vec<Vec<f64>> = (0..vertex_count)
            .into_par_iter()
            .map(|source| shortest_paths_from(&reweighted, source, &potentials))
            .collect();

        let mut distances = SquareMatrix::splat(vertex_count, NO_EDGE);
        for (source, row) in rows.into_iter().enumerate() {
            for (target, distance) in row.into_iter().enumerate() {
                distances.set(source, target, distance);
            }
        }

        debug!(vertices = vertex_count, "distance matrix assembled");
        Ok(distances)
    }
}
