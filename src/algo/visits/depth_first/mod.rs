/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback must be called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), [every time the enumeration of the
//! successors of a node is completed](EventPred::Postvisit), and [at the end
//! of a visit](EventPred::Done).
//!
//! Note that since events contain the predecessor of the visited node, all
//! post-start visit events can be interpreted as arc events. The only
//! exception are the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit keeping
/// track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: the visit of a new tree is starting.
    Init {
        /// The root of the tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Previsit::curr`) in the visit
        /// tree, or the root itself for the root.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path
        /// from the root to [curr](`EventPred::Previsit::curr`).
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node whose successors are being enumerated.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from the root to
        /// [pred](`EventPred::Revisit::pred`), plus one.
        depth: usize,
        /// Whether [curr](`EventPred::Revisit::curr`) is currently on the
        /// visit path, that is, if we are traversing a back arc.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Postvisit::curr`) in the visit
        /// tree, or the root itself for the root.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of [curr](`EventPred::Postvisit::curr`).
        depth: usize,
    },
    /// The visit of the tree has been completed.
    Done {
        /// The root of the tree.
        root: usize,
    },
}

/// The state of a node during a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Color {
    /// The node has not been discovered yet.
    #[default]
    Unvisited,
    /// The node is on the visit path.
    InProgress,
    /// The enumeration of the successors of the node has been completed.
    Done,
}
