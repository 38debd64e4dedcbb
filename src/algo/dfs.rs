/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, VisitOrder};
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// The outcome of a depth-first visit of a whole graph.
///
/// Timestamps come from a single counter, local to the visit, which is
/// incremented once per discovery and once per completion; hence
/// `discovery(x) < finish(x)` for every node, and the intervals of two nodes
/// are either disjoint or nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsForest {
    discovery: Box<[usize]>,
    finish: Box<[usize]>,
    parent: Box<[Option<usize>]>,
    roots: Vec<usize>,
}

impl DfsForest {
    /// Returns the number of nodes of the visited graph.
    pub fn num_nodes(&self) -> usize {
        self.parent.len()
    }

    /// The discovery timestamp of each node.
    pub fn discovery(&self) -> &[usize] {
        &self.discovery
    }

    /// The finish timestamp of each node.
    pub fn finish(&self) -> &[usize] {
        &self.finish
    }

    /// The parent of each node in its visit tree, or `None` for roots.
    pub fn parent(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// The roots of the visit trees, in the order in which the trees were
    /// started.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns, for each root, the nodes of its visit tree.
    ///
    /// Trees are rebuilt from the parent map. Each tree is returned in
    /// preorder with respect to the tree arcs, starting from its root. Trees
    /// are computed lazily, in the order of [`roots`](DfsForest::roots).
    pub fn treesets(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let mut children = vec![Vec::new(); self.num_nodes()];
        // Children are listed by discovery time, so that trees follow the
        // order of the visit
        let mut by_discovery = (0..self.num_nodes()).collect::<Vec<_>>();
        by_discovery.sort_unstable_by_key(|&node| self.discovery[node]);
        for node in by_discovery {
            if let Some(pred) = self.parent[node] {
                children[pred].push(node);
            }
        }

        self.roots.iter().map(move |&root| {
            let mut tree = Vec::new();
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                tree.push(node);
                stack.extend(children[node].iter().rev());
            }
            tree
        })
    }
}

/// Performs a depth-first visit of a whole graph, recording timestamps,
/// parents, and roots.
///
/// # Arguments
/// * `graph`: the graph.
/// * `order`: the policy deciding the order in which roots and successors
///   are explored.
/// * `pl`: a progress logger.
pub fn dfs(graph: &Graph, order: impl VisitOrder, pl: &mut impl ProgressLog) -> DfsForest {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Visiting graph depth-first...");

    let mut visit = SeqPath::with_order(graph, order);
    let mut discovery = vec![0; num_nodes].into_boxed_slice();
    let mut finish = vec![0; num_nodes].into_boxed_slice();
    let mut parent = vec![None; num_nodes].into_boxed_slice();
    let mut roots = Vec::new();
    let mut time = 0;

    visit
        .visit_all(
            |event| {
                match event {
                    EventPred::Init { root } => {
                        roots.push(root);
                    }
                    EventPred::Previsit { curr, pred, .. } => {
                        discovery[curr] = time;
                        time += 1;
                        if curr != pred {
                            parent[curr] = Some(pred);
                        }
                    }
                    EventPred::Postvisit { curr, .. } => {
                        finish[curr] = time;
                        time += 1;
                    }
                    _ => (),
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();

    DfsForest {
        discovery,
        finish,
        parent,
        roots,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::visits::Natural;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_timestamps() {
        // 0 -> 1 -> 2, 0 -> 2, isolated 3
        let graph = Graph::from_arcs([(0, 1), (1, 2), (0, 2), (3, 3)]);
        let forest = dfs(&graph, Natural, no_logging![]);

        assert_eq!(forest.discovery(), &[0, 1, 2, 6]);
        assert_eq!(forest.finish(), &[5, 4, 3, 7]);
        assert_eq!(forest.parent(), &[None, Some(0), Some(1), None]);
        assert_eq!(forest.roots(), &[0, 3]);
        assert_eq!(
            forest.treesets().collect::<Vec<_>>(),
            vec![vec![0, 1, 2], vec![3]]
        );
    }

    #[test]
    fn test_empty() {
        let forest = dfs(&Graph::new(), Natural, no_logging![]);
        assert_eq!(forest.num_nodes(), 0);
        assert!(forest.roots().is_empty());
        assert_eq!(forest.treesets().count(), 0);
    }
}
