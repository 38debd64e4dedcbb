/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::{
    dfs,
    visits::{DecreasingKey, Natural},
    DfsForest,
};
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;

/// Performs the two visits of Kosaraju's algorithm and returns the second
/// one.
///
/// The first visit is a visit of the transpose in insertion order. The
/// second visit is a visit of `graph` in which both roots and successors are
/// explored by decreasing finish time in the first visit. Each tree of the
/// returned forest is a strongly connected component, so the
/// [roots](DfsForest::roots) of the forest are representatives of the
/// components and its [trees](DfsForest::treesets) are the components.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn kosaraju_forest(graph: &Graph, pl: &mut impl ProgressLog) -> DfsForest {
    let transpose = graph.transpose();
    // Vertices are matched by name, and the transpose assigns the same
    // index to the same name
    debug_assert!((0..graph.num_nodes()).all(|node| {
        graph.name(node) == transpose.name(node)
    }));

    let transposed = dfs(&transpose, Natural, pl);
    dfs(graph, DecreasingKey(transposed.finish()), pl)
}

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// Components are numbered in the order in which their roots are found by
/// the second visit of [`kosaraju_forest`].
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn kosaraju(graph: &Graph, pl: &mut impl ProgressLog) -> Sccs {
    let forest = kosaraju_forest(graph, pl);
    let mut component = vec![0; graph.num_nodes()].into_boxed_slice();
    let mut number_of_components = 0;

    for tree in forest.treesets() {
        for node in tree {
            component[node] = number_of_components;
        }
        number_of_components += 1;
    }

    pl.info(format_args!(
        "Found {number_of_components} strongly connected components"
    ));

    Sccs::new(number_of_components, component)
}
