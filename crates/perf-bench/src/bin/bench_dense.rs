use std::hint::black_box;
use std::time::Instant;

use apsp_solver_core::{AllPairsSolver, JohnsonSolver};
use perf_bench::*;

fn main() {
    let graph = generate_dense_graph(DENSE_NUM_NODES);

    let start_time = Instant::now();
    let distances = JohnsonSolver
        .shortest_distances(&graph)
        .expect("generated graph has no negative cycle");
    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(finite_checksum(&distances));

    println!(
        "--- Dense Benchmark Results ({} Nodes, complete graph) ---",
        DENSE_NUM_NODES
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
