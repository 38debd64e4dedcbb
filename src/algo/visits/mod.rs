/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on named graphs.
//!
//! Visits are driven by callbacks returning a [`ControlFlow`]: returning
//! [`Break`](ControlFlow::Break) interrupts the visit, and the break value is
//! returned to the caller. Visits that cannot be interrupted use
//! [`Infallible`](std::convert::Infallible) as break type, and their result
//! can be unwrapped with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).
//!
//! The order in which nodes are explored is decided by a [`VisitOrder`]
//! policy, which rearranges both the candidate roots and the successors of
//! each node before they are explored.
//!
//! [`ControlFlow`]: std::ops::ControlFlow

pub mod depth_first;

/// A policy rearranging the nodes a visit is about to explore.
///
/// The policy is applied to the candidate roots of a visit of the whole graph
/// and to the successors of each node when the node is discovered. Any
/// closure taking a mutable slice of nodes is a policy.
pub trait VisitOrder {
    /// Rearranges in place the given nodes.
    fn arrange(&self, nodes: &mut [usize]);
}

/// The identity policy: nodes are explored in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl VisitOrder for Natural {
    #[inline(always)]
    fn arrange(&self, _nodes: &mut [usize]) {}
}

/// A policy exploring nodes by decreasing key.
///
/// The key of node `x` is `self.0[x]`. The sort is stable, so nodes with the
/// same key keep their relative order.
#[derive(Debug, Clone, Copy)]
pub struct DecreasingKey<'a>(pub &'a [usize]);

impl VisitOrder for DecreasingKey<'_> {
    fn arrange(&self, nodes: &mut [usize]) {
        let keys = self.0;
        nodes.sort_by(|&x, &y| keys[y].cmp(&keys[x]));
    }
}

impl<F: Fn(&mut [usize])> VisitOrder for F {
    #[inline(always)]
    fn arrange(&self, nodes: &mut [usize]) {
        self(nodes)
    }
}
