/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! There are two algorithms, which return the same partition of the nodes:
//!
//! * [`kosaraju`] performs a visit of the transpose and then a visit of the
//!   graph by decreasing finish time in the transpose; each tree of the
//!   second visit is a component. The second visit is available as a
//!   [`DfsForest`](crate::algo::DfsForest) through [`kosaraju_forest`].
//! * [`single_pass`] performs a single visit keeping a stack of nodes not yet
//!   assigned to a component and a stack of candidate component roots.
//!
//! Both algorithms return a [`Sccs`] structure. Components are numbered
//! starting from zero in the order in which they are completed, that is, in
//! the order of the roots of the second visit for [`kosaraju`] and in reverse
//! topological order of the condensation for [`single_pass`].

use crate::graph::Graph;
use rayon::prelude::*;

mod kosaraju;
pub use kosaraju::*;

mod single_pass;
pub use single_pass::*;

/// The strongly connected components of a graph.
///
/// The components form a partition of the nodes: each node has exactly one
/// [component index](Sccs::component), smaller than
/// [`num_components`](Sccs::num_components).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    component: Box<[usize]>,
}

impl Sccs {
    /// Creates a new instance.
    ///
    /// # Panics
    ///
    /// In debug mode, if some component index is not smaller than
    /// `num_components`.
    pub fn new(num_components: usize, component: Box<[usize]>) -> Self {
        debug_assert!(component.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            component,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// Returns the nodes of each component, in increasing order, indexed by
    /// component.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.num_components];
        for (node, &c) in self.component.iter().enumerate() {
            components[c].push(node);
        }
        components
    }

    /// Returns the names of the vertices of each component, indexed by
    /// component.
    pub fn names<'a>(&self, graph: &'a Graph) -> Vec<Vec<&'a str>> {
        self.components()
            .into_iter()
            .map(|nodes| nodes.into_iter().map(|node| graph.name(node)).collect())
            .collect()
    }

    /// Returns true if the graph consists of exactly one strongly connected
    /// component.
    ///
    /// An empty graph has no components, and it is thus not adequate.
    pub fn is_adequate(&self) -> bool {
        self.num_components == 1
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()].into_boxed_slice();
        for &node_component in self.component() {
            sizes[node_component] += 1;
        }
        sizes
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, the sizes of strongly connected
    /// components are decreasing in the component index. Components of the
    /// same size keep their relative order.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (new_index, &old_index) in sort_perm.iter().enumerate() {
            inv_perm[old_index] = new_index;
        }
        self.component
            .par_iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compute_sizes() {
        let sccs = Sccs::new(3, vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 0].into_boxed_slice());
        assert_eq!(sccs.compute_sizes(), vec![5, 2, 3].into_boxed_slice());
    }

    #[test]
    fn test_sort_by_size() {
        let mut sccs = Sccs::new(3, vec![0, 1, 1, 1, 0, 2].into_boxed_slice());
        sccs.sort_by_size();
        assert_eq!(sccs.component(), &[1, 0, 0, 0, 1, 2]);
        assert_eq!(sccs.compute_sizes(), vec![3, 2, 1].into_boxed_slice());
    }

    #[test]
    fn test_components_and_names() {
        let mut graph = Graph::new();
        graph.add_edges("x", ["y"]);
        graph.add_edges("y", ["x"]);
        graph.add_vertex("z");
        let sccs = Sccs::new(2, vec![1, 1, 0].into_boxed_slice());

        assert_eq!(sccs.components(), vec![vec![2], vec![0, 1]]);
        assert_eq!(sccs.names(&graph), vec![vec!["z"], vec!["x", "y"]]);
        assert!(!sccs.is_adequate());
        assert!(!Sccs::new(0, Box::new([])).is_adequate());
    }
}
