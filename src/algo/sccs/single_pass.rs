/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::visits::depth_first::*;
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;
use sux::bits::BitVec;

/// Computes the strongly connected components of a graph with a single
/// path-based visit.
///
/// The visit keeps two stacks of nodes in discovery order: the stack of
/// nodes not yet assigned to a component, and the stack of candidate
/// component roots, which is a subsequence of the former. Finding an arc to
/// an unassigned node merges all candidates discovered after that node into
/// the same component. When the enumeration of the successors of a node that
/// is still the topmost candidate is completed, the node is the root of a
/// component made of all unassigned nodes discovered after it.
///
/// Components are numbered in the order in which they are completed, which
/// is a reverse topological order of the condensation.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn single_pass(graph: &Graph, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(graph);
    let mut preorder = vec![0; num_nodes].into_boxed_slice();
    let mut assigned = BitVec::new(num_nodes);
    let mut unassigned = Vec::with_capacity(16);
    let mut undetermined: Vec<usize> = Vec::with_capacity(16);
    let mut component = vec![0; num_nodes].into_boxed_slice();
    let mut index = 0;
    let mut number_of_components = 0;

    visit
        .visit_all(
            |event| {
                match event {
                    EventPred::Previsit { curr, .. } => {
                        preorder[curr] = index;
                        index += 1;
                        unassigned.push(curr);
                        undetermined.push(curr);
                    }
                    EventPred::Revisit { curr, .. } => {
                        if !assigned.get(curr) {
                            // Candidates discovered after curr are in the
                            // same component of curr
                            while let Some(&top) = undetermined.last() {
                                if preorder[top] <= preorder[curr] {
                                    break;
                                }
                                undetermined.pop();
                            }
                        }
                    }
                    EventPred::Postvisit { curr, .. } => {
                        if undetermined.last() == Some(&curr) {
                            undetermined.pop();
                            while let Some(node) = unassigned.pop() {
                                assigned.set(node, true);
                                component[node] = number_of_components;
                                if node == curr {
                                    break;
                                }
                            }
                            number_of_components += 1;
                        }
                    }
                    _ => (),
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    debug_assert!(unassigned.is_empty());
    debug_assert!(undetermined.is_empty());

    pl.info(format_args!(
        "Found {number_of_components} strongly connected components"
    ));
    pl.done();

    Sccs::new(number_of_components, component)
}
