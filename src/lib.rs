/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of directed graphs with named vertices.
//!
//! A graph is *adequate* if it consists of a single strongly connected
//! component, that is, if every vertex can reach every other vertex. This
//! crate computes the components with [Kosaraju's
//! algorithm](algo::sccs::kosaraju) or with a [single-pass
//! visit](algo::sccs::single_pass), and checks the results by [brute-force
//! reachability](algo::reachability).

pub mod algo;
pub mod graph;
pub mod input;

/// Use `use scc_adequacy::prelude::*;` to import common utilities, modules
/// and functions.
pub mod prelude {
    use super::*;
    pub use algo::reachability;
    pub use algo::sccs;
    pub use algo::visits::depth_first;
    pub use algo::visits::{DecreasingKey, Natural, VisitOrder};
    pub use algo::{dfs, DfsForest};
    pub use graph::{Graph, Vertex};
    pub use input::{parse_graph, read_graph, InputError};
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of
/// threads, or with the default number of threads if no argument is given.
///
/// # Panics
///
/// If the thread pool cannot be built.
#[macro_export]
macro_rules! threads {
    () => {
        ::rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        ::rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with default parameters and {} threads",
                    $num_threads,
                )
            })
    };
}
