use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input graph contains a directed cycle whose weights sum to a
    /// negative number, so "shortest path" is undefined for it.
    /// Raised by the Bellman-Ford convergence check; the computation
    /// aborts and a retry on the same input fails the same way.
    #[error("Graph contains a negative-weight cycle.")]
    NegativeCycle,

    /// Row `row` of the input does not match the dimension implied by the
    /// number of rows. Only raised while constructing a `SquareMatrix`,
    /// never by the solver itself.
    #[error("Row {row} has {len} entries, expected a {expected}x{expected} matrix.")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}
