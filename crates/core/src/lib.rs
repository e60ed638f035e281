pub mod dijkstra;
pub mod edges;
pub mod potentials;
pub mod reweight;
pub mod solver;
pub mod traits;

pub use solver::JohnsonSolver;
pub use traits::AllPairsSolver;
