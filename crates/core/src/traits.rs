use common::{error::Error, types::SquareMatrix};

/// Trait for solvers computing shortest distances between every pair of
/// vertices of a weighted directed graph.
pub trait AllPairsSolver {
    /// Returns the V x V matrix of shortest distances for a V x V
    /// adjacency matrix, with `NO_EDGE` marking unreachable pairs.
    ///
    /// Returns `Err(Error::NegativeCycle)` if the graph contains a
    /// negative-weight cycle.
    fn shortest_distances(&self, graph: &SquareMatrix) -> Result<SquareMatrix, Error>;
}
