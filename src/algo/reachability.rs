/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Brute-force reachability.
//!
//! The functions in this module perform a full visit from each root they are
//! given, so they are quadratic when used to check adequacy. They are meant to
//! validate the results of the algorithms in [`sccs`](crate::algo::sccs).

use crate::algo::visits::depth_first::*;
use crate::graph::Graph;
use dsi_progress_logger::{no_logging, ProgressLog};
use no_break::NoBreak;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::collections::BTreeSet;
use std::ops::ControlFlow::Continue;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the nodes reachable from `root`, `root` included.
pub fn reachable(graph: &Graph, root: usize) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();
    SeqPred::new(graph)
        .visit(
            root,
            |event| {
                if let EventPred::Previsit { curr, .. } = event {
                    result.insert(curr);
                }
                Continue(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    result
}

/// Returns the nodes that are not reachable from `root`.
pub fn unreachable(graph: &Graph, root: usize) -> BTreeSet<usize> {
    let reach = reachable(graph, root);
    (0..graph.num_nodes())
        .filter(|node| !reach.contains(node))
        .collect()
}

fn count_reachable(graph: &Graph, root: usize) -> usize {
    let mut count = 0;
    SeqPred::new(graph)
        .visit(
            root,
            |event| {
                if let EventPred::Previsit { .. } = event {
                    count += 1;
                }
                Continue(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    count
}

/// Returns true if every node reaches every other node, that is, if the graph
/// has exactly one strongly connected component.
///
/// A visit is started from each node in parallel; the check stops as soon as
/// a visit misses some node. An empty graph is not adequate. The progress
/// logger is updated with the number of roots whose visit was completed.
///
/// # Arguments
/// * `graph`: the graph.
/// * `thread_pool`: the thread pool running the visits.
/// * `pl`: a progress logger.
pub fn all_reachable(
    graph: &Graph,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("root");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking reachability from every node...");

    let visited_roots = AtomicUsize::new(0);
    let adequate = num_nodes > 0
        && thread_pool.install(|| {
            (0..num_nodes).into_par_iter().all(|root| {
                let count = count_reachable(graph, root);
                visited_roots.fetch_add(1, Ordering::Relaxed);
                count == num_nodes
            })
        });

    pl.update_with_count(visited_roots.into_inner());
    pl.done();
    adequate
}

/// Returns, for each node that does not reach every other node, the node
/// and the set of nodes it does not reach.
///
/// Nodes are returned in increasing order.
///
/// # Arguments
/// * `graph`: the graph.
/// * `thread_pool`: the thread pool running the visits.
pub fn unreachable_pairs(
    graph: &Graph,
    thread_pool: &ThreadPool,
) -> Vec<(usize, BTreeSet<usize>)> {
    thread_pool.install(|| {
        (0..graph.num_nodes())
            .into_par_iter()
            .filter_map(|root| {
                let missing = unreachable(graph, root);
                (!missing.is_empty()).then_some((root, missing))
            })
            .collect()
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reachable() {
        let graph = Graph::from_arcs([(0, 1), (1, 2), (3, 0)]);
        assert_eq!(reachable(&graph, 0), BTreeSet::from([0, 1, 2]));
        assert_eq!(unreachable(&graph, 0), BTreeSet::from([3]));
        assert_eq!(reachable(&graph, 3).len(), 4);
        assert!(unreachable(&graph, 3).is_empty());
    }

    #[test]
    fn test_all_reachable_with_logger() {
        use dsi_progress_logger::ProgressLogger;

        let thread_pool = crate::threads![2];
        let mut pl = ProgressLogger::default();
        let cycle = Graph::from_arcs([(0, 1), (1, 2), (2, 0)]);
        assert!(all_reachable(&cycle, &thread_pool, &mut pl));

        let path = Graph::from_arcs([(0, 1), (1, 2)]);
        assert!(!all_reachable(&path, &thread_pool, &mut pl));
        assert!(!all_reachable(&Graph::new(), &thread_pool, &mut pl));
    }

    #[test]
    fn test_self_loop() {
        let graph = Graph::from_arcs([(0, 0)]);
        assert_eq!(reachable(&graph, 0), BTreeSet::from([0]));
    }
}
