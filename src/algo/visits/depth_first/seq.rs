/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    depth_first::{Color, EventPred},
    Natural, VisitOrder,
};
use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which keeps track of predecessors, but not of nodes
/// on the stack.
pub type SeqPred<'a, O = Natural> = SeqIter<'a, TwoStates, O>;

/// A depth-first visit which keeps track of predecessors and nodes on the
/// stack.
pub type SeqPath<'a, O = Natural> = SeqIter<'a, ThreeStates, O>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack
/// size: each entry of the visit stack stores the successors of a node,
/// already rearranged by the [visit order](VisitOrder), and the index of the
/// next successor to explore. The sequence of events is the same of the
/// classical recursive formulation.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqPred`] and [`SeqPath`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqPred`] uses one bit per node to remember known nodes; the Boolean
///   associated with events of type [`Revisit`](`EventPred::Revisit`) is
///   always false. It can be used, for example, to compute reachability
///   information.
/// * [`SeqPath`] uses two bits per node to remember known nodes and whether
///   the node is on the visit path, so it can also report the
///   [color](SeqPath::color) of each node.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// completion of each postvisit.
///
/// # Examples
///
/// Let us compute a postorder of the nodes:
///
/// ```
/// use scc_adequacy::algo::visits::depth_first::*;
/// use scc_adequacy::graph::Graph;
/// use dsi_progress_logger::no_logging;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = Graph::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3)]);
/// let mut visit = SeqPred::new(&graph);
/// let mut postorder = Vec::new();
///
/// visit
///     .visit_all(
///         |event| {
///             if let EventPred::Postvisit { curr, .. } = event {
///                 postorder.push(curr);
///             }
///             Continue(())
///         },
///         no_logging![],
///     )
///     .continue_value_no_break();
///
/// assert_eq!(postorder, vec![2, 3, 1, 0]);
/// ```
///
/// Or let us stop as soon as a back arc is found:
///
/// ```
/// use scc_adequacy::algo::visits::depth_first::*;
/// use scc_adequacy::graph::Graph;
/// use dsi_progress_logger::no_logging;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = Graph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = SeqPath::new(&graph);
///
/// assert!(visit
///     .visit_all(
///         |event| match event {
///             EventPred::Revisit { on_stack: true, .. } => Break(()),
///             _ => Continue(()),
///         },
///         no_logging![],
///     )
///     .is_break()); // As the graph is not acyclic
/// ```
pub struct SeqIter<'a, S, O> {
    graph: &'a Graph,
    order: O,
    stack: Vec<Frame>,
    state: S,
}

/// An entry of the visit stack.
struct Frame {
    successors: Box<[usize]>,
    /// Index in `successors` at which the enumeration resumes.
    next: usize,
    /// The parent of the node in the visit tree.
    pred: usize,
}

fn arranged(graph: &Graph, order: &impl VisitOrder, node: usize) -> Box<[usize]> {
    let mut successors = graph.successors(node).collect::<Box<[usize]>>();
    order.arrange(&mut successors);
    successors
}

impl<'a, S: NodeStates> SeqIter<'a, S, Natural> {
    /// Creates a new sequential visit exploring nodes in insertion order.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_order(graph, Natural)
    }
}

impl<'a, S: NodeStates, O: VisitOrder> SeqIter<'a, S, O> {
    /// Creates a new sequential visit with a given visit order.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    /// * `order`: the policy rearranging roots and successors.
    pub fn with_order(graph: &'a Graph, order: O) -> Self {
        Self {
            graph,
            order,
            stack: Vec::with_capacity(16),
            state: S::new(graph.num_nodes()),
        }
    }

    /// Returns true if the node has been discovered by this visit.
    pub fn is_known(&self, node: usize) -> bool {
        self.state.known(node)
    }

    /// Visits the graph from the specified node.
    ///
    /// If `root` has already been discovered, no event is generated.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function; if it returns
    ///   [`Break`](ControlFlow::Break), the visit is interrupted and the
    ///   break value is returned.
    /// * `pl`: a progress logger.
    pub fn visit<B, C: FnMut(EventPred) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        let state = &mut self.state;

        if state.known(root) {
            return Continue(());
        }

        // Frames left over by an interrupted visit
        self.stack.clear();

        callback(EventPred::Init { root })?;

        state.set_known(root);
        state.set_on_stack(root);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack.push(Frame {
            successors: arranged(self.graph, &self.order, root),
            next: 0,
            pred: root,
        });

        // This variable keeps track of the current node being visited; the
        // parent node is stored in its stack frame.
        let mut curr = root;

        'recurse: loop {
            let depth = self.stack.len();
            let Some(frame) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Continue(());
            };

            while let Some(&succ) = frame.successors.get(frame.next) {
                frame.next += 1;
                if state.known(succ) {
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: curr,
                        root,
                        depth,
                        on_stack: state.on_stack(succ),
                    })?;
                } else {
                    state.set_known(succ);
                    state.set_on_stack(succ);

                    callback(EventPred::Previsit {
                        curr: succ,
                        pred: curr,
                        root,
                        depth,
                    })?;

                    // curr is the parent of succ
                    let successors = arranged(self.graph, &self.order, succ);
                    self.stack.push(Frame {
                        successors,
                        next: 0,
                        pred: curr,
                    });

                    // At the next iteration, succ will be the current node
                    curr = succ;

                    continue 'recurse;
                }
            }

            let pred = frame.pred;

            callback(EventPred::Postvisit {
                curr,
                pred,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            state.set_off_stack(curr);

            // We're going up one stack level, so the next current node
            // is the current parent.
            curr = pred;
            self.stack.pop();
        }
    }

    /// Visits the whole graph.
    ///
    /// Candidate roots are all nodes, rearranged by the visit order; each
    /// candidate that has not been discovered yet starts a new visit tree.
    ///
    /// See [`visit`](SeqIter::visit) for more details.
    pub fn visit_all<B, C: FnMut(EventPred) -> ControlFlow<B, ()>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        let mut roots = (0..self.graph.num_nodes()).collect::<Box<[usize]>>();
        self.order.arrange(&mut roots);

        for &root in roots.iter() {
            self.visit(root, &mut callback, pl)?;
        }

        Continue(())
    }

    /// Resets the visit status, making it possible to reuse it.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.state = S::new(self.graph.num_nodes());
    }
}

impl<'a, O> SeqIter<'a, ThreeStates, O> {
    /// Returns the current color of a node.
    pub fn color(&self, node: usize) -> Color {
        match (self.state.known(node), self.state.on_stack(node)) {
            (false, _) => Color::Unvisited,
            (true, true) => Color::InProgress,
            (true, false) => Color::Done,
        }
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of nodes on the stack, so events
/// of type [`Revisit`](`EventPred::Revisit`) will always have the associated
/// Boolean equal to false.
pub struct TwoStates(BitVec);

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of nodes on the stack, so events of
/// type [`Revisit`](`EventPred::Revisit`) will provide information about
/// whether the node associated with event is currently on the visit path.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
}

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;
    use no_break::NoBreak;

    #[test]
    fn test_colors_during_visit() {
        let graph = Graph::from_arcs([(0, 1), (1, 2)]);
        let mut visit = SeqPath::new(&graph);
        let mut seen = Vec::new();

        visit
            .visit(
                0,
                |event| {
                    if let EventPred::Postvisit { curr, .. } = event {
                        seen.push(curr);
                    }
                    Continue(())
                },
                no_logging![],
            )
            .continue_value_no_break();

        assert_eq!(seen, vec![2, 1, 0]);
        for node in 0..3 {
            assert_eq!(visit.color(node), Color::Done);
        }

        visit.reset();
        assert_eq!(visit.color(1), Color::Unvisited);
    }

    #[test]
    fn test_order_policy_applies_to_roots_and_successors() {
        let graph = Graph::from_arcs([(0, 1), (0, 2), (3, 3)]);
        let mut visit = SeqPred::with_order(&graph, |nodes: &mut [usize]| nodes.reverse());
        let mut previsits = Vec::new();

        visit
            .visit_all(
                |event| {
                    if let EventPred::Previsit { curr, .. } = event {
                        previsits.push(curr);
                    }
                    Continue(())
                },
                no_logging![],
            )
            .continue_value_no_break();

        assert_eq!(previsits, vec![3, 2, 1, 0]);
    }
}
